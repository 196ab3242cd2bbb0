//! # Blue Moon インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール送信**: トランザクションメール API（Resend）への HTTPS 呼び出し
//!
//! ## 依存関係
//!
//! ```text
//! portal → infra → domain
//!    ↘               ↑
//!      ──────────────
//! ```
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信トレイトと実装
//! - `mock` - テスト用の記録型モック（`test-utils` feature 有効時のみ）

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;

pub use notification::{
    NoopNotificationSender,
    NotificationSender,
    ResendConfig,
    ResendNotificationSender,
};
