//! # リポジトリ
//!
//! Todo の保存先を抽象化するトレイトと、その実装を提供する。
//!
//! - **依存性逆転**: ユースケースはトレイトにのみ依存する
//! - **テスタビリティ**: テストごとに独立したストアを生成できる

pub mod todo_repository;

pub use todo_repository::{InMemoryTodoRepository, TodoRepository, seed_todos};
