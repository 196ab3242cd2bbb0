//! # Blue Moon サポートポータル
//!
//! サポート依頼フォームを表示し、送信内容をトランザクションメール API 経由で
//! サポート窓口へ転送する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State とルーターの構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ページ生成エラーと HTTP レスポンス変換
//! - `handler`: HTTP ハンドラ
//! - `page`: フォームページのレンダリング
//! - `usecase`: 通知メールの生成と送信

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod page;
pub mod usecase;
