//! Todo 管理ユースケース

use std::sync::Arc;

use todo_api_domain::{
   DomainError,
   todo::{Todo, TodoContent, TodoId, TodoPatch},
};
use todo_api_infra::repository::TodoRepository;

use crate::error::TodoError;

/// Todo 作成の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoInput {
   pub content: TodoContent,
}

/// Todo 部分更新の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoInput {
   pub id:    TodoId,
   pub patch: TodoPatch,
}

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
   repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
   pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
      Self { repository }
   }

   /// すべての Todo を挿入順で取得する
   pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
      Ok(self.repository.find_all().await?)
   }

   pub async fn get_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
      let todo = self
         .repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| not_found(id))?;
      Ok(todo)
   }

   /// Todo を作成する
   ///
   /// ID はストアが採番し、`completed` は `false` で作成される。
   pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, TodoError> {
      let todo = self.repository.create(input.content).await?;

      tracing::info!(todo_id = %todo.id(), "Todo を作成しました");
      Ok(todo)
   }

   /// Todo を部分更新する
   ///
   /// パッチで指定されたフィールドのみ変更する。
   pub async fn update_todo(&self, input: UpdateTodoInput) -> Result<Todo, TodoError> {
      let todo = self
         .repository
         .update(input.id, input.patch)
         .await?
         .ok_or_else(|| not_found(input.id))?;

      tracing::info!(todo_id = %todo.id(), completed = todo.completed(), "Todo を更新しました");
      Ok(todo)
   }

   pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
      if !self.repository.delete(id).await? {
         return Err(not_found(id).into());
      }

      tracing::info!(todo_id = %id, "Todo を削除しました");
      Ok(())
   }
}

fn not_found(id: TodoId) -> DomainError {
   DomainError::NotFound {
      entity_type: "Todo",
      id:          id.to_string(),
   }
}
