//! # ヘルスチェックハンドラ
//!
//! レスポンス型は [`todo_api_shared::HealthResponse`] を参照。

use axum::Json;
use todo_api_shared::HealthResponse;

/// Liveness Check（常に `"healthy"` を返す）
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
