//! # サポート依頼サービス
//!
//! テンプレートレンダリング → メール送信を統合し、結果をバナー表示用の
//! [`SubmissionOutcome`] に変換する。
//!
//! ## 設計方針
//!
//! - **失敗は値として返す**: `submit()` はエラーを返さず、失敗理由を含む結果を返す
//! - **リトライしない**: 送信は 1 回のみ
//! - **依存性注入**: `NotificationSender` は trait で抽象化

use std::sync::Arc;

use bluemoon_domain::support_request::SupportRequest;
use bluemoon_infra::NotificationSender;
use bluemoon_shared::{
    event_log::{error, event},
    log_business_event,
};

use super::TemplateRenderer;

/// 送信成功時のバナー文言
pub const SUCCESS_MESSAGE: &str =
    "Your support request has been submitted successfully! We'll be in touch shortly.";

/// 1 回のフォーム送信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// メール送信に成功
    Success,
    /// 送信できなかった（理由はそのままバナーに表示する）
    Failure(String),
}

impl SubmissionOutcome {
    /// バナーに表示する文言
    pub fn message(&self) -> &str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Failure(reason) => reason,
        }
    }

    /// バナーの種別（CSS クラス名）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure(_) => "error",
        }
    }
}

/// サポート依頼サービス
pub struct SupportRequestService {
    sender: Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
    support_inbox: String,
}

impl SupportRequestService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
        support_inbox: String,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            support_inbox,
        }
    }

    /// サポート依頼をメールで送信する
    ///
    /// テンプレートレンダリング・送信のいずれで失敗しても
    /// [`SubmissionOutcome::Failure`] を返す（ログ出力あり）。
    #[tracing::instrument(skip_all, fields(urgency = %request.urgency))]
    pub async fn submit(&self, request: &SupportRequest) -> SubmissionOutcome {
        let email = match self.template_renderer.render(request, &self.support_inbox) {
            Ok(email) => email,
            Err(e) => {
                log_business_event!(
                    event.category = event::category::SUPPORT_REQUEST,
                    event.action = event::action::SUPPORT_REQUEST_FAILED,
                    event.result = event::result::FAILURE,
                    support_request.service = %request.service,
                    error.category = error::category::INTERNAL,
                    error.kind = error::kind::TEMPLATE,
                    "通知テンプレートのレンダリングに失敗: {}",
                    e
                );
                return SubmissionOutcome::Failure(e.to_string());
            }
        };

        match self.sender.send_email(&email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::SUPPORT_REQUEST,
                    event.action = event::action::SUPPORT_REQUEST_SENT,
                    event.result = event::result::SUCCESS,
                    support_request.service = %request.service,
                    "サポート依頼メール送信成功"
                );
                SubmissionOutcome::Success
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::SUPPORT_REQUEST,
                    event.action = event::action::SUPPORT_REQUEST_FAILED,
                    event.result = event::result::FAILURE,
                    support_request.service = %request.service,
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::EMAIL_DELIVERY,
                    notification.error = e.kind(),
                    "サポート依頼メール送信失敗: {}",
                    e
                );
                SubmissionOutcome::Failure(e.to_string())
            }
        }
    }
}
