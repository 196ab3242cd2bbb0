//! # ユースケース
//!
//! サポート依頼の通知メール生成・送信を統合する。
//!
//! ## モジュール構成
//!
//! - [`template_renderer`] - tera テンプレートエンジンによるメール生成
//! - [`support_request`] - テンプレートレンダリング + 送信の統合サービス

pub mod support_request;
pub mod template_renderer;

pub use support_request::{SubmissionOutcome, SupportRequestService};
pub use template_renderer::TemplateRenderer;
