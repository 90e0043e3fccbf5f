//! # Todo ハンドラ
//!
//! Todo の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /todo/` - Todo 一覧（挿入順）
//! - `GET /todo/{id}` - Todo 取得
//! - `POST /todo/` - Todo 作成
//! - `PATCH /todo/{id}` - Todo 部分更新
//! - `DELETE /todo/{id}` - Todo 削除
//!
//! 末尾スラッシュの有無は区別しない（`/todo`、`/todo/{id}/` も同じハンドラに割り当てる）。

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use todo_api_domain::todo::Todo;
use todo_api_shared::{ErrorResponse, ValidationErrorResponse};
use utoipa::ToSchema;

use crate::{
   error::TodoError,
   usecase::TodoUseCaseImpl,
   validation::{self, JsonBody, TodoIdParam},
};

/// Todo API の共有状態
pub struct TodoState {
   pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TodoData {
   #[schema(example = 1, minimum = 1)]
   pub id:        u64,
   #[schema(example = "Learn TypeScript")]
   pub content:   String,
   #[schema(example = false)]
   pub completed: bool,
}

impl From<&Todo> for TodoData {
   fn from(todo: &Todo) -> Self {
      Self {
         id:        todo.id().as_u64(),
         content:   todo.content().as_str().to_string(),
         completed: todo.completed(),
      }
   }
}

/// Todo 作成リクエスト
///
/// スキーマ定義専用の型。ボディの検証は [`validation::create_input`] が行う。
#[derive(Debug, ToSchema)]
pub struct CreateTodoRequest {
   #[schema(example = "Buy milk", min_length = 1)]
   pub content: String,
}

/// Todo 部分更新リクエスト
///
/// 指定したフィールドのみ更新する。
/// スキーマ定義専用の型。ボディの検証は [`validation::update_input`] が行う。
#[derive(Debug, ToSchema)]
pub struct UpdateTodoRequest {
   #[schema(example = "Buy oat milk", min_length = 1)]
   pub content:   Option<String>,
   #[schema(example = true)]
   pub completed: Option<bool>,
}

// --- ハンドラ ---

/// GET /todo/
#[utoipa::path(
   get,
   path = "/todo/",
   tag = "todo",
   responses(
      (status = 200, description = "Todo 一覧（挿入順）", body = Vec<TodoData>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_todos(
   State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoError> {
   let todos = state.usecase.list_todos().await?;

   let items: Vec<TodoData> = todos.iter().map(TodoData::from).collect();
   Ok((StatusCode::OK, Json(items)))
}

/// GET /todo/{id}
///
/// ## レスポンス
///
/// - `200 OK`: Todo
/// - `404 Not Found`: Todo が存在しない
/// - `422 Unprocessable Entity`: ID が正の整数でない
#[utoipa::path(
   get,
   path = "/todo/{id}",
   tag = "todo",
   params(("id" = u64, Path, description = "Todo ID")),
   responses(
      (status = 200, description = "Todo", body = TodoData),
      (status = 404, description = "Todo が存在しない", body = ErrorResponse),
      (status = 422, description = "不正な ID", body = ValidationErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn get_todo(
   State(state): State<Arc<TodoState>>,
   TodoIdParam(id): TodoIdParam,
) -> Result<impl IntoResponse, TodoError> {
   let todo = state.usecase.get_todo(id).await?;

   Ok((StatusCode::OK, Json(TodoData::from(&todo))))
}

/// POST /todo/
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Todo（`completed` は `false`）
/// - `422 Unprocessable Entity`: `content` の欠落・型不正・空文字列、JSON 不正
#[utoipa::path(
   post,
   path = "/todo/",
   tag = "todo",
   request_body = CreateTodoRequest,
   responses(
      (status = 201, description = "作成された Todo", body = TodoData),
      (status = 422, description = "バリデーションエラー", body = ValidationErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, TodoError> {
   let input = validation::create_input(body)?;

   let todo = state.usecase.create_todo(input).await?;

   Ok((StatusCode::CREATED, Json(TodoData::from(&todo))))
}

/// PATCH /todo/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `404 Not Found`: Todo が存在しない
/// - `422 Unprocessable Entity`: 不正な ID またはボディ
#[utoipa::path(
   patch,
   path = "/todo/{id}",
   tag = "todo",
   params(("id" = u64, Path, description = "Todo ID")),
   request_body = UpdateTodoRequest,
   responses(
      (status = 200, description = "更新後の Todo", body = TodoData),
      (status = 404, description = "Todo が存在しない", body = ErrorResponse),
      (status = 422, description = "バリデーションエラー", body = ValidationErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   TodoIdParam(id): TodoIdParam,
   JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, TodoError> {
   let input = validation::update_input(id, body)?;

   let todo = state.usecase.update_todo(input).await?;

   Ok((StatusCode::OK, Json(TodoData::from(&todo))))
}

/// DELETE /todo/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功（ボディなし）
/// - `404 Not Found`: Todo が存在しない
/// - `422 Unprocessable Entity`: 不正な ID
#[utoipa::path(
   delete,
   path = "/todo/{id}",
   tag = "todo",
   params(("id" = u64, Path, description = "Todo ID")),
   responses(
      (status = 204, description = "削除成功"),
      (status = 404, description = "Todo が存在しない", body = ErrorResponse),
      (status = 422, description = "不正な ID", body = ValidationErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   TodoIdParam(id): TodoIdParam,
) -> Result<impl IntoResponse, TodoError> {
   state.usecase.delete_todo(id).await?;

   Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use serde_json::json;
   use todo_api_domain::todo::{TodoContent, TodoId};
   use utoipa::{
      PartialSchema,
      openapi::{
         RefOr,
         schema::{Object, Schema},
      },
   };

   use super::*;

   fn object_schema(schema: RefOr<Schema>) -> Object {
      match schema {
         RefOr::T(Schema::Object(object)) => object,
         other => panic!("オブジェクトスキーマを期待したが {other:?} だった"),
      }
   }

   #[test]
   fn test_todo_dataはドメインの値をそのまま写す() {
      let todo = Todo::from_parts(
         TodoId::new(3).unwrap(),
         TodoContent::new("Deploy to Vercel").unwrap(),
         true,
      );

      assert_eq!(
         serde_json::to_value(TodoData::from(&todo)).unwrap(),
         serde_json::json!({ "id": 3, "content": "Deploy to Vercel", "completed": true })
      );
   }

   #[test]
   fn test_作成リクエストのスキーマは検証ルールと一致する() {
      let schema = object_schema(CreateTodoRequest::schema());

      assert_eq!(schema.required, vec!["content".to_string()]);
      let content = object_schema(schema.properties["content"].clone());
      assert_eq!(content.min_length, Some(1));

      // 必須・最小長の制約は create_input でも拒否される
      assert!(validation::create_input(json!({})).is_err());
      assert!(validation::create_input(json!({ "content": "" })).is_err());
      assert!(validation::create_input(json!({ "content": "a" })).is_ok());
   }

   #[test]
   fn test_更新リクエストのスキーマは全フィールド省略可能である() {
      let schema = object_schema(UpdateTodoRequest::schema());

      assert!(schema.required.is_empty(), "{:?}", schema.required);
      assert!(schema.properties.contains_key("content"));
      assert!(schema.properties.contains_key("completed"));

      let id = TodoId::new(1).unwrap();
      assert!(validation::update_input(id, json!({})).is_ok());
      assert!(validation::update_input(id, json!({ "content": "" })).is_err());
   }
}
