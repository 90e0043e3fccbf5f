//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Todo API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use todo_api_shared::{ErrorResponse, HealthResponse, ValidationErrorResponse, ValidationIssue};
use utoipa::OpenApi;

use crate::handler::{
   health,
   todo::{self, CreateTodoRequest, TodoData, UpdateTodoRequest},
};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Todo API",
      version = "1.0.0",
      description = "インメモリで Todo を管理する CRUD API"
   ),
   paths(
      // health
      health::health_check,
      // todo
      todo::list_todos,
      todo::get_todo,
      todo::create_todo,
      todo::update_todo,
      todo::delete_todo,
   ),
   components(schemas(
      TodoData,
      CreateTodoRequest,
      UpdateTodoRequest,
      ErrorResponse,
      ValidationErrorResponse,
      ValidationIssue,
      HealthResponse,
   )),
   tags(
      (name = "todo", description = "Todo の一覧・取得・作成・更新・削除"),
      (name = "health", description = "ヘルスチェック"),
   )
)]
pub struct ApiDoc;
