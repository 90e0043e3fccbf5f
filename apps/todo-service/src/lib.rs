//! # Todo Service ライブラリ
//!
//! Todo API サーバーの設定・ハンドラ・ユースケースを公開する。
//! `main.rs` と結合テスト（`tests/`）の双方から利用する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State の初期化とルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - サービスのエラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`openapi`] - OpenAPI 仕様定義
//! - [`usecase`] - ビジネスロジック
//! - [`validation`] - パスパラメータ・リクエストボディの検証

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
pub mod validation;
