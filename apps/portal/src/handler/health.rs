//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//!
//! 送信 API への疎通は確認しない（送信のたびに 1 回だけ呼ぶ設計のため）。

use axum::Json;
use bluemoon_shared::HealthResponse;

/// ポータルのヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
