//! # API ドキュメントハンドラ
//!
//! `GET /doc` で OpenAPI 仕様を JSON として返す。
//! ドキュメントは起動時に一度だけ生成し、リクエストごとには再生成しない。

use std::sync::Arc;

use axum::{Json, extract::State};
use utoipa::openapi::OpenApi;

/// 生成済みの OpenAPI 仕様
pub struct DocState {
   pub document: OpenApi,
}

/// GET /doc
pub async fn openapi_json(State(state): State<Arc<DocState>>) -> Json<OpenApi> {
   Json(state.document.clone())
}
