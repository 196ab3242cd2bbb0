//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! `jq` でログを調査しやすいよう、フィールドの命名規約とヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! `tracing::error!` / `tracing::warn!` に `error.category` + `error.kind` フィールドを
//! 直接追加する。定数は [`error`] モジュールで提供。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`error.kind`）を使用。JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const SUPPORT_REQUEST: &str = "support_request";
    }

    /// イベントアクション
    pub mod action {
        pub const SUPPORT_REQUEST_SENT: &str = "support_request.sent";
        pub const SUPPORT_REQUEST_FAILED: &str = "support_request.failed";
        pub const SUPPORT_REQUEST_REJECTED: &str = "support_request.rejected";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// ポータル内部（テンプレート、設定）
        pub const INTERNAL: &str = "internal";
        /// 外部サービス呼び出し（メール送信 API）
        pub const EXTERNAL_SERVICE: &str = "external_service";
    }

    /// エラー種別
    pub mod kind {
        pub const TEMPLATE: &str = "template";
        pub const CONFIGURATION: &str = "configuration";
        pub const EMAIL_DELIVERY: &str = "email_delivery";
    }
}
