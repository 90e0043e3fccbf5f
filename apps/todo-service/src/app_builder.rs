//! # Todo Service アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定の読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
   Router,
   http::{Method, header},
   routing::get,
};
use todo_api_infra::repository::TodoRepository;
use todo_api_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   cors::CorsLayer,
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
   config::TodoConfig,
   handler::{
      DocState,
      TodoState,
      WelcomeState,
      create_todo,
      delete_todo,
      fallback,
      get_todo,
      health_check,
      list_todos,
      openapi_json,
      update_todo,
      welcome,
   },
   openapi::ApiDoc,
   usecase::TodoUseCaseImpl,
};

/// State の構築とルーター定義を行う
///
/// リポジトリを受け取り、ユースケース → State → Router の順に組み立てる。
pub fn build_app(config: &TodoConfig, repository: Arc<dyn TodoRepository>) -> Router {
   let todo_state = Arc::new(TodoState {
      usecase: TodoUseCaseImpl::new(repository),
   });
   let welcome_state = Arc::new(WelcomeState {
      base_url: config.base_url.clone(),
   });
   let doc_state = Arc::new(DocState {
      document: ApiDoc::openapi(),
   });

   let cors = CorsLayer::new()
      .allow_origin(config.cors_allowed_origin.clone())
      .allow_methods([
         Method::GET,
         Method::POST,
         Method::PATCH,
         Method::PUT,
         Method::DELETE,
      ])
      .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::COOKIE]);

   let todo_item = get(get_todo).patch(update_todo).delete(delete_todo);

   // ルーター構築
   // 末尾スラッシュの有無は区別しない（`/todo` と `/todo/`、`/todo/{id}` と `/todo/{id}/`）
   // 未対応のメソッドも未定義のルートと同じ 404 を返す
   Router::new()
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/", get(welcome))
            .with_state(welcome_state),
      )
      .merge(
         Router::new()
            .route("/doc", get(openapi_json))
            .with_state(doc_state),
      )
      .merge(
         Router::new()
            .route("/todo", get(list_todos).post(create_todo))
            .route("/todo/", get(list_todos).post(create_todo))
            .route("/todo/{id}", todo_item.clone())
            .route("/todo/{id}/", todo_item)
            .with_state(todo_state),
      )
      .fallback(fallback)
      .method_not_allowed_fallback(fallback)
      .layer(cors)
      // Request ID レイヤー（下に書いたものが外側）
      // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
      // 2. TraceLayer: リクエストスパンに request_id を含める
      // 3. PropagateRequestIdLayer: レスポンスヘッダーに x-request-id を付与
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
