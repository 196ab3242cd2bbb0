//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンでサポート依頼の通知メールを生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名パターン**: `[{緊急度}] {サービス} - {氏名}`
//! - **エスケープ**: `.html` テンプレートは tera の autoescape 対象。
//!   概要欄のみ、エスケープ後に改行を `<br />` 付きに変換してから `safe` で埋め込む

use bluemoon_domain::{
    notification::{EmailMessage, NotificationError},
    support_request::SupportRequest,
};
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "support_request.html";

/// テンプレートレンダラー
///
/// `SupportRequest` から `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_template(
                TEMPLATE_NAME,
                include_str!("../../templates/notifications/support_request.html"),
            )
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// サポート依頼から通知メールを生成する
    ///
    /// # 引数
    ///
    /// - `request`: フォームから組み立てたサポート依頼
    /// - `support_inbox`: 送信先（サポート窓口）のメールアドレス
    pub fn render(
        &self,
        request: &SupportRequest,
        support_inbox: &str,
    ) -> Result<EmailMessage, NotificationError> {
        let subject = format!(
            "[{}] {} - {}",
            request.urgency, request.service, request.name
        );

        let urgency: &str = request.urgency.into();
        let mut context = Context::new();
        context.insert("name", &request.name);
        context.insert("email", &request.email);
        context.insert("phone", &request.phone);
        context.insert("service", &request.service);
        context.insert("urgency", urgency);
        context.insert(
            "summary_html",
            &insert_line_breaks(&tera::escape_html(&request.summary)),
        );

        let html_body = self
            .engine
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: support_inbox.to_string(),
            subject,
            html_body,
            reply_to: request.reply_to().map(str::to_string),
        })
    }
}

/// 改行（`\r\n` / `\n\r` / `\n` / `\r`）の直前に `<br />` を挿入する
///
/// 改行文字自体は残す。入力はエスケープ済みであること。
fn insert_line_breaks(escaped: &str) -> String {
    let mut html = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\r' && c != '\n' {
            html.push(c);
            continue;
        }

        html.push_str("<br />");
        html.push(c);
        let pair = if c == '\r' { '\n' } else { '\r' };
        if let Some(next) = chars.next_if_eq(&pair) {
            html.push(next);
        }
    }

    html
}
