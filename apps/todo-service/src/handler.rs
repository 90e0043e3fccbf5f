//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは入力の検証とレスポンスへの変換に専念し、処理はユースケースに委譲

pub mod doc;
pub mod health;
pub mod root;
pub mod todo;

pub use doc::{DocState, openapi_json};
pub use health::health_check;
pub use root::{WelcomeState, fallback, welcome};
pub use todo::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo};
