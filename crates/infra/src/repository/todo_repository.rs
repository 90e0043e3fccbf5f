//! # TodoRepository
//!
//! Todo の保存・取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **採番はストアの責務**: ID の採番と追加を同一ロック内で行い、
//!   同時作成でも ID が重複しないようにする
//! - **単調増加カウンタ**: 削除された ID は再利用しない
//! - **部分更新もストア内で完結**: 読み出し・適用・書き戻しを 1 回の排他ロックで行う

use std::sync::Arc;

use async_trait::async_trait;
use todo_api_domain::todo::{Todo, TodoContent, TodoId, TodoPatch};
use tokio::sync::RwLock;

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// 一覧・取得・作成・部分更新・削除を定義する。
/// 一覧は挿入順を保持する。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// すべての Todo を挿入順で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// 新しい ID を採番して Todo を作成し、末尾に追加する
    async fn create(&self, content: TodoContent) -> Result<Todo, InfraError>;

    /// 部分更新を適用する
    ///
    /// 対象が存在しない場合は `Ok(None)` を返す。
    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>, InfraError>;

    /// Todo を削除する
    ///
    /// 削除した場合は `true`、対象が存在しない場合は `false` を返す。
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError>;
}

/// 起動時に投入する初期データ
pub fn seed_todos() -> Vec<Todo> {
    [
        (1, "Learn TypeScript", false),
        (2, "Build a Todo API", false),
        (3, "Deploy to Vercel", true),
    ]
    .into_iter()
    .filter_map(|(id, content, completed)| {
        Some(Todo::from_parts(
            TodoId::new(id).ok()?,
            TodoContent::new(content).ok()?,
            completed,
        ))
    })
    .collect()
}

/// ストアの内部状態
///
/// `next_id` が `None` の場合は採番上限に達している。
#[derive(Debug)]
struct TodoStore {
    todos:   Vec<Todo>,
    next_id: Option<TodoId>,
}

/// インメモリ実装の TodoRepository
///
/// 一覧とカウンタを 1 つの `RwLock` で保護する。
/// 変更系の操作は排他ロック下で 1 件ずつ適用される。
#[derive(Debug, Clone)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<TodoStore>>,
}

impl InMemoryTodoRepository {
    /// 空のリポジトリを作成する
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    /// 初期データ（[`seed_todos`]）入りのリポジトリを作成する
    pub fn seeded() -> Self {
        Self::with_todos(seed_todos())
    }

    /// 指定した Todo を初期状態とするリポジトリを作成する
    ///
    /// 次に採番する ID は既存 ID の最大値 + 1（空の場合は 1）。
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = match todos.iter().map(Todo::id).max() {
            Some(max) => max.next(),
            None => Some(TodoId::FIRST),
        };
        Self {
            store: Arc::new(RwLock::new(TodoStore { todos, next_id })),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.store.read().await.todos.clone())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .store
            .read()
            .await
            .todos
            .iter()
            .find(|todo| todo.id() == id)
            .cloned())
    }

    async fn create(&self, content: TodoContent) -> Result<Todo, InfraError> {
        let mut store = self.store.write().await;

        let id = store.next_id.ok_or_else(InfraError::id_exhausted)?;
        let todo = Todo::new(id, content);
        store.todos.push(todo.clone());
        store.next_id = id.next();

        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>, InfraError> {
        let mut store = self.store.write().await;

        let Some(slot) = store.todos.iter_mut().find(|todo| todo.id() == id) else {
            return Ok(None);
        };
        let updated = slot.clone().apply(patch);
        *slot = updated.clone();

        Ok(Some(updated))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let mut store = self.store.write().await;

        match store.todos.iter().position(|todo| todo.id() == id) {
            Some(index) => {
                store.todos.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
