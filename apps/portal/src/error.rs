//! # ポータルのエラーハンドリング
//!
//! ページ生成のエラー定義と、axum レスポンスへの変換。
//! メール送信の失敗はここではなくバナーとして表示される。

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use bluemoon_shared::event_log::error;
use thiserror::Error;

/// 500 応答の本文（内部情報を含めない）
const INTERNAL_ERROR_PAGE: &str = "<!DOCTYPE html><html lang=\"en\"><head><meta \
                                   charset=\"UTF-8\"><title>Blue Moon IT</title></head><body>\
                                   <h1>Something went wrong</h1><p>Please try again later or \
                                   call us directly.</p></body></html>";

/// ポータルのエラー
#[derive(Debug, Error)]
pub enum PortalError {
    /// ページテンプレートのレンダリングに失敗
    #[error("ページのレンダリングに失敗: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        tracing::error!(
            error.category = error::category::INTERNAL,
            error.kind = error::kind::TEMPLATE,
            "ページ生成で内部エラー: {}",
            self
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}
