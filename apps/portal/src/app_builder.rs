//! # ポータルアプリケーション構築
//!
//! DI（送信実装・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use bluemoon_infra::{NoopNotificationSender, NotificationSender, ResendNotificationSender};
use bluemoon_shared::{
    event_log::error,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::{NotificationBackend, NotificationConfig, PortalConfig},
    handler::{PortalState, health_check, show_portal, submit_portal},
    page::PageRenderer,
    usecase::{SupportRequestService, TemplateRenderer},
};

/// 設定に応じたメール送信実装を作成する
pub fn build_notification_sender(
    config: &NotificationConfig,
) -> anyhow::Result<Arc<dyn NotificationSender>> {
    match config.backend {
        NotificationBackend::Resend => {
            let sender = ResendNotificationSender::new(config.resend.clone())?;
            if !sender.is_configured() {
                // 起動は継続し、送信のたびに設定エラーをバナーで返す
                tracing::warn!(
                    error.category = error::category::INTERNAL,
                    error.kind = error::kind::CONFIGURATION,
                    "RESEND_API_KEY が未設定または形式が不正です"
                );
            }
            tracing::info!(base_url = %config.resend.base_url, "メール送信: Resend");
            Ok(Arc::new(sender))
        }
        NotificationBackend::Noop => {
            tracing::info!("メール送信: Noop（送信しない）");
            Ok(Arc::new(NoopNotificationSender))
        }
    }
}

/// 設定から State を組み立てる
pub fn build_state(config: &PortalConfig) -> anyhow::Result<Arc<PortalState>> {
    let sender = build_notification_sender(&config.notification)?;
    Ok(Arc::new(PortalState {
        support_request_service: SupportRequestService::new(
            sender,
            TemplateRenderer::new()?,
            config.notification.support_inbox.clone(),
        ),
        page_renderer:           PageRenderer::new()?,
    }))
}

/// ルーターを構築する
///
/// Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与されログに自動注入される
pub fn build_router(state: Arc<PortalState>) -> Router {
    Router::new()
        .route("/", get(show_portal).post(submit_portal))
        .route("/health", get(health_check))
        .with_state(state)
        // レイヤー順序: 下に書いたものが外側
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
