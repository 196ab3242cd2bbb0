//! Resend 通知送信実装
//!
//! Resend の HTTP API（`POST /emails`）を使用してメールを送信する。
//! 本番環境で使用する。
//!
//! ## エラー分類
//!
//! | 状況 | エラー |
//! |------|--------|
//! | API キーが `re_` で始まらない / 未設定 | `Configuration`（通信しない） |
//! | DNS / TLS / 接続 / タイムアウト | `Transport` |
//! | 2xx 以外 + JSON の `message` | `Provider` |
//! | 2xx 以外 + 解釈不能なボディ | `UnknownApi` |

use std::{error::Error as _, fmt, time::Duration};

use async_trait::async_trait;
use bluemoon_domain::notification::{EmailMessage, NotificationError};
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};

use super::NotificationSender;

/// API キーを読み込む環境変数名
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

/// Resend の API キーが持つプレフィックス
const API_KEY_PREFIX: &str = "re_";

/// Resend 送信設定
#[derive(Clone)]
pub struct ResendConfig {
    /// API のベース URL（例: `https://api.resend.com`）
    pub base_url:     String,
    /// API キー（未設定の場合は送信時に `Configuration` エラー）
    pub api_key:      Option<String>,
    /// 送信元（例: `Blue Moon Portal <support@bluemoonit.com.au>`）
    pub from_address: String,
    /// 1 リクエストあたりのタイムアウト
    pub timeout:      Duration,
}

impl fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("from_address", &self.from_address)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `POST /emails` のリクエストボディ
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from:     &'a str,
    to:       &'a str,
    subject:  &'a str,
    html:     &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// エラーレスポンスのボディ
#[derive(Debug, Deserialize)]
struct ErrorResponseBody {
    message: Option<String>,
}

/// Resend 通知送信
///
/// `reqwest::Client` をラップする。タイムアウトはクライアント単位で設定する。
#[derive(Debug)]
pub struct ResendNotificationSender {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendNotificationSender {
    /// 新しい Resend 送信インスタンスを作成
    ///
    /// API キーの検証は送信時に行う。キーが不正でも起動は継続し、
    /// 送信のたびに `Configuration` エラーを返す。
    pub fn new(config: ResendConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config: ResendConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    /// API キーが設定済みで形式も正しいか
    pub fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }

    /// 形式が正しい API キーを返す
    ///
    /// `Authorization` ヘッダーに載せられない文字（改行など）を含むキーも不正とする。
    fn api_key(&self) -> Result<&str, NotificationError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| key.starts_with(API_KEY_PREFIX))
            .filter(|key| HeaderValue::from_str(&format!("Bearer {key}")).is_ok())
            .ok_or_else(|| NotificationError::Configuration(API_KEY_ENV.to_string()))
    }
}

#[async_trait]
impl NotificationSender for ResendNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let api_key = self.api_key()?;

        let url = format!("{}/emails", self.config.base_url);
        let request = SendEmailRequest {
            from:     &self.config.from_address,
            to:       &email.to,
            subject:  &email.subject,
            html:     &email.html_body,
            reply_to: email.reply_to.as_deref(),
        };

        tracing::debug!(to = %email.to, "Resend: メール送信リクエスト");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotificationError::Transport(describe_transport_error(&e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_error_response(status.as_u16(), &body))
    }
}

/// 通信エラーの詳細を原因チェーンごと連結する
///
/// reqwest のトップレベルのメッセージは URL しか含まないため、
/// 接続拒否やタイムアウトなどの原因を後ろに続ける。
fn describe_transport_error(err: &reqwest::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

/// 2xx 以外のレスポンスをエラーに分類する
fn classify_error_response(status: u16, body: &str) -> NotificationError {
    match serde_json::from_str::<ErrorResponseBody>(body) {
        Ok(ErrorResponseBody {
            message: Some(message),
        }) if !message.is_empty() => NotificationError::Provider { status, message },
        _ => NotificationError::UnknownApi { status },
    }
}
