//! # Todo API ドメイン層
//!
//! Todo 管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 生成時に検証される不変の値（[`todo::TodoId`],
//!   [`todo::TodoContent`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア、HTTP）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todo_api_domain::todo::{Todo, TodoContent, TodoId};
//!
//! let todo = Todo::new(TodoId::new(1)?, TodoContent::new("Buy milk")?);
//! assert!(!todo.completed());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
