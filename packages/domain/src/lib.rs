//! # Blue Moon ドメイン層
//!
//! サポートポータルのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - 永続化しない: すべての型はリクエスト処理中だけ存在する
//! - インフラ非依存: HTTP クライアントやテンプレートエンジンに依存しない
//!
//! ## モジュール構成
//!
//! - [`support_request`] - サポート依頼（フォーム送信内容）と緊急度
//! - [`notification`] - 送信用メールメッセージと送信エラー

pub mod notification;
pub mod support_request;
