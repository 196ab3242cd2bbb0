//! # ポータルページ
//!
//! サポート依頼フォームのページを tera でレンダリングする。
//! 送信結果がある場合はフォームの上にバナーを表示する。

use bluemoon_domain::support_request::{SERVICE_CATALOG, Urgency};
use serde::Serialize;
use tera::{Context, Tera};

use crate::usecase::SubmissionOutcome;

const TEMPLATE_NAME: &str = "portal.html";

/// バナー（テンプレートに渡す形）
#[derive(Debug, Serialize)]
struct Banner<'a> {
    kind:    &'static str,
    message: &'a str,
}

/// ポータルページのレンダラー
pub struct PageRenderer {
    engine: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut engine = Tera::default();
        engine.add_raw_template(TEMPLATE_NAME, include_str!("../templates/portal.html"))?;

        Ok(Self { engine })
    }

    /// ページを生成する
    ///
    /// `outcome` が `None` の場合はバナーなしのフォームのみ。
    /// バナー文言は autoescape される。
    pub fn render(&self, outcome: Option<&SubmissionOutcome>) -> Result<String, tera::Error> {
        let banner = outcome.map(|outcome| Banner {
            kind:    outcome.kind(),
            message: outcome.message(),
        });
        let urgencies: Vec<&'static str> = [Urgency::Low, Urgency::Medium, Urgency::High]
            .into_iter()
            .map(Into::into)
            .collect();
        let default_urgency: &'static str = Urgency::default().into();

        let mut context = Context::new();
        context.insert("banner", &banner);
        context.insert("services", SERVICE_CATALOG);
        context.insert("urgencies", &urgencies);
        context.insert("default_urgency", default_urgency);

        self.engine.render(TEMPLATE_NAME, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn バナーなしでフォームを表示する() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render(None).unwrap();

        assert!(html.contains("<form method=\"POST\""));
        assert!(html.contains("name=\"submit_support\""));
        assert!(!html.contains("class=\"msg-alert"));
    }

    #[test]
    fn サービス一覧と緊急度の初期値を表示する() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render(None).unwrap();

        assert!(html.contains("<option>PC Repairs &amp; Upgrades</option>"));
        assert!(html.contains("<option>Other</option>"));
        assert!(html.contains("value=\"Medium\" checked"));
        assert!(!html.contains("value=\"High\" checked"));
    }

    #[test]
    fn 成功バナーを表示する() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render(Some(&SubmissionOutcome::Success)).unwrap();

        assert!(html.contains("msg-alert success"));
        assert!(html.contains("submitted successfully"));
    }

    #[test]
    fn エラーバナーの文言はエスケープされる() {
        let renderer = PageRenderer::new().unwrap();
        let outcome = SubmissionOutcome::Failure("Send Failed: <b>oops</b> (HTTP 500)".to_string());

        let html = renderer.render(Some(&outcome)).unwrap();

        assert!(html.contains("msg-alert error"));
        assert!(html.contains("&lt;b&gt;oops"));
        assert!(!html.contains("<b>oops</b>"));
    }
}
