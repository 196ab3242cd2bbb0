//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **表示文字列 = 利用者向けメッセージ**: [`NotificationError`] の `Display` は
//!   そのままポータルのエラーバナーに表示される
//! - **リトライしない**: 送信は 1 回限りのベストエフォート
//! - **テンプレート分離**: メール生成（TemplateRenderer）と送信（NotificationSender）は分離

use thiserror::Error;

/// 通知送信エラー
///
/// 送信 API 呼び出しの失敗を 4 分類 + テンプレート失敗で表す。
/// いずれもプロセスにとって致命的ではなく、リクエスト境界で回復される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// API キーが未設定、または形式が不正（ネットワーク呼び出しは行っていない）
    #[error("Error: Invalid or Missing API Key. Please configure {0}.")]
    Configuration(String),

    /// DNS / TLS / 接続 / タイムアウトなどの通信エラー
    #[error("Connection Failed: {0}")]
    Transport(String),

    /// 送信 API が 2xx 以外を返し、エラーメッセージを含んでいた
    #[error("Send Failed: {message} (HTTP {status})")]
    Provider { status: u16, message: String },

    /// 送信 API が 2xx 以外を返し、レスポンスボディを解釈できなかった
    #[error("Send Failed: Unknown API Error (HTTP {status})")]
    UnknownApi { status: u16 },

    /// テンプレートレンダリングに失敗
    #[error("Failed to prepare the support request email: {0}")]
    TemplateFailed(String),
}

impl NotificationError {
    /// ログの `error.kind` に対応する分類名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Transport(_) => "transport",
            Self::Provider { .. } => "provider",
            Self::UnknownApi { .. } => "unknown_api",
            Self::TemplateFailed(_) => "template",
        }
    }
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// 返信先メールアドレス（依頼者のアドレス）
    pub reply_to:  Option<String>,
}
