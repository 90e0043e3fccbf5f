//! # ルートハンドラ
//!
//! - `GET /` - ウェルカムメッセージ（API ドキュメントの URL を案内する）
//! - 未定義のルート - 404 `Not Found - <path>`

use std::sync::Arc;

use axum::{
   Json,
   extract::State,
   http::{StatusCode, Uri},
   response::IntoResponse,
};
use serde::Serialize;
use todo_api_shared::ErrorResponse;

/// ウェルカムメッセージの共有状態
pub struct WelcomeState {
   /// 公開 URL（末尾のスラッシュは含めない）
   pub base_url: String,
}

/// ウェルカムメッセージ
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
   pub message: String,
}

/// GET /
pub async fn welcome(State(state): State<Arc<WelcomeState>>) -> Json<WelcomeResponse> {
   Json(WelcomeResponse {
      message: format!(
         "Welcome to the Todo API! Visit {}/doc for the API documentation.",
         state.base_url.trim_end_matches('/')
      ),
   })
}

/// 未定義のルートに対するフォールバック
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn fallback(uri: Uri) -> impl IntoResponse {
   tracing::debug!("未定義のルートへのリクエスト");
   (
      StatusCode::NOT_FOUND,
      Json(ErrorResponse::route_not_found(uri.path())),
   )
}
