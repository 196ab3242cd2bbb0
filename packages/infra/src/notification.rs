//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: Resend（本番用）、Noop（ローカル開発用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択

mod noop;
mod resend;

use async_trait::async_trait;
use bluemoon_domain::notification::{EmailMessage, NotificationError};
pub use noop::NoopNotificationSender;
pub use resend::{API_KEY_ENV, ResendConfig, ResendNotificationSender};

/// メール送信トレイト
///
/// 送信は 1 回限り。リトライやキューイングは行わない。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
