//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、送信処理は `SupportRequestService` に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `portal`: サポート依頼フォームの表示と送信

pub mod health;
pub mod portal;

pub use health::health_check;
pub use portal::{PortalState, SupportRequestForm, show_portal, submit_portal};
