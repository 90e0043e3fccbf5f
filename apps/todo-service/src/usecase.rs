//! # ユースケース層
//!
//! Todo Service のアプリケーションロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の検証と変換に専念し、処理はユースケースに集約

pub mod todo;

pub use todo::TodoUseCaseImpl;
