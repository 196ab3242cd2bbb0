//! # Blue Moon 共有ユーティリティ
//!
//! ポータルの各クレートから使われる共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum 等の Web フレームワークには依存しない
//! - トレーシング初期化は `observability` feature の背後に置く

pub mod event_log;
pub mod health;
pub mod observability;

pub use health::HealthResponse;
