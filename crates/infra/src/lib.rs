//! # Todo API インフラ層
//!
//! Todo の保存先を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトでストアの詳細をカプセル化し、ユースケースには
//! トレイトオブジェクトとして注入する。現在の実装はプロセス内メモリのみで、
//! 再起動をまたいだ永続化は行わない。
//!
//! ## 依存関係
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトとインメモリ実装
//!
//! ## 使用例
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todo_api_domain::todo::TodoContent;
//! use todo_api_infra::repository::{InMemoryTodoRepository, TodoRepository};
//!
//! let repository = InMemoryTodoRepository::seeded();
//! let todo = repository.create(TodoContent::new("X")?).await?;
//! assert_eq!(todo.id().as_u64(), 4);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
