//! # サポートポータルサーバー
//!
//! サポート依頼フォームを提供し、送信内容をメールでサポート窓口へ転送する。
//!
//! ## 構成
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│    Portal    │────▶│  Resend API  │
//! │  (フォーム)   │◀────│  port: 8080  │     │ POST /emails │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PORTAL_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORTAL_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `NOTIFICATION_BACKEND` | No | `resend` または `noop`（デフォルト: `resend`） |
//! | `RESEND_API_KEY` | No | Resend の API キー。未設定時は送信のたびにエラーバナー |
//! | `RESEND_BASE_URL` | No | Resend のベース URL |
//! | `NOTIFICATION_FROM_ADDRESS` | No | 送信元 |
//! | `SUPPORT_INBOX_ADDRESS` | No | 送信先（サポート窓口） |
//! | `NOTIFICATION_TIMEOUT_SECS` | No | 送信 API のタイムアウト秒数（デフォルト: `10`） |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p bluemoon-portal
//!
//! # 送信せずに動作確認
//! NOTIFICATION_BACKEND=noop cargo run -p bluemoon-portal
//! ```

use std::net::SocketAddr;

use bluemoon_portal::{app_builder, config::PortalConfig};
use bluemoon_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// ポータルサーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. State とルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("portal");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    let config = PortalConfig::from_env()?;
    tracing::info!(
        "サポートポータルを起動します: {}:{}",
        config.host,
        config.port
    );

    let state = app_builder::build_state(&config)?;
    let app = app_builder::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("サポートポータルが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
