//! # サポート依頼フォームハンドラ
//!
//! - `GET /`: フォームを表示する
//! - `POST /`: フォームを受け取り、メール送信結果のバナー付きでページを再表示する
//!
//! `submit_support` フィールド（送信ボタン）が無い POST は送信意図なしとみなし、
//! 何も送らずにフォームを再表示する。

use std::sync::Arc;

use axum::{Form, extract::State, response::Html};
use bluemoon_domain::support_request::{SupportRequest, SupportRequestError, Urgency};
use bluemoon_shared::{event_log::event, log_business_event};
use serde::Deserialize;

use crate::{
    error::PortalError,
    page::PageRenderer,
    usecase::{SubmissionOutcome, SupportRequestService},
};

/// ポータルの State
///
/// 起動時に 1 度だけ構築し、以降は読み取り専用。
pub struct PortalState {
    pub support_request_service: SupportRequestService,
    pub page_renderer:           PageRenderer,
}

/// フォームの入力値
///
/// すべて任意。未入力のテキストは空文字列、未指定の緊急度は Medium として扱う。
#[derive(Debug, Default, Deserialize)]
pub struct SupportRequestForm {
    pub name:           Option<String>,
    pub email:          Option<String>,
    pub phone:          Option<String>,
    pub service:        Option<String>,
    pub urgency:        Option<String>,
    pub summary:        Option<String>,
    /// 送信ボタン（値は問わず、存在すれば送信意図あり）
    pub submit_support: Option<String>,
}

impl SupportRequestForm {
    /// 送信意図があるか
    pub fn is_submission(&self) -> bool {
        self.submit_support.is_some()
    }

    /// ドメインのサポート依頼に変換する
    pub fn into_support_request(self) -> Result<SupportRequest, SupportRequestError> {
        let urgency = Urgency::from_form(self.urgency.as_deref())?;

        Ok(SupportRequest {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            service: self.service.unwrap_or_default(),
            urgency,
            summary: self.summary.unwrap_or_default(),
        })
    }
}

/// GET /
pub async fn show_portal(
    State(state): State<Arc<PortalState>>,
) -> Result<Html<String>, PortalError> {
    Ok(Html(state.page_renderer.render(None)?))
}

/// POST /
///
/// 1. フォームをサポート依頼に変換（不正な緊急度はここで拒否）
/// 2. `SupportRequestService` でメール送信
/// 3. 結果をバナーとしてページを再表示
#[tracing::instrument(skip_all)]
pub async fn submit_portal(
    State(state): State<Arc<PortalState>>,
    Form(form): Form<SupportRequestForm>,
) -> Result<Html<String>, PortalError> {
    if !form.is_submission() {
        tracing::debug!("submit_support がないため送信をスキップ");
        return Ok(Html(state.page_renderer.render(None)?));
    }

    let outcome = match form.into_support_request() {
        Ok(request) => state.support_request_service.submit(&request).await,
        Err(e) => {
            log_business_event!(
                event.category = event::category::SUPPORT_REQUEST,
                event.action = event::action::SUPPORT_REQUEST_REJECTED,
                event.result = event::result::FAILURE,
                "サポート依頼を拒否: {}",
                e
            );
            SubmissionOutcome::Failure(e.to_string())
        }
    };

    Ok(Html(state.page_renderer.render(Some(&outcome))?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 未入力のフィールドは空文字列になり緊急度はmediumになる() {
        let form = SupportRequestForm {
            submit_support: Some(String::new()),
            ..Default::default()
        };

        let request = form.into_support_request().unwrap();

        assert_eq!(
            request,
            SupportRequest {
                name:    String::new(),
                email:   String::new(),
                phone:   String::new(),
                service: String::new(),
                urgency: Urgency::Medium,
                summary: String::new(),
            }
        );
    }

    #[test]
    fn 不正な緊急度は変換エラーになる() {
        let form = SupportRequestForm {
            urgency: Some("Urgent".to_string()),
            ..Default::default()
        };

        assert_eq!(
            form.into_support_request(),
            Err(SupportRequestError::InvalidUrgency("Urgent".to_string()))
        );
    }

    #[test]
    fn 送信ボタンの有無で送信意図を判定する() {
        let with_button = SupportRequestForm {
            submit_support: Some(String::new()),
            ..Default::default()
        };

        assert!(with_button.is_submission());
        assert!(!SupportRequestForm::default().is_submission());
    }
}
