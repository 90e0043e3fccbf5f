//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス | ボディ |
//! |-----------|-----------|--------|
//! | `Validation` | 422 | [`ValidationErrorResponse`] |
//! | `NotFound` | 404 | [`ErrorResponse::not_found`] |
//! | `Infra` | 500 | [`ErrorResponse::internal_error`] |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_api_domain::DomainError;
use todo_api_shared::{ErrorResponse, ValidationErrorResponse, ValidationIssue};

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
   /// 入力検証エラー
   #[error("入力検証エラー: {0:?}")]
   Validation(Vec<ValidationIssue>),

   /// Todo が見つからない
   #[error("Todo が見つかりません")]
   NotFound,

   /// ストアのエラー
   #[error("ストアエラー: {0}")]
   Infra(#[from] todo_api_infra::InfraError),
}

impl TodoError {
   /// 単一項目の検証エラーを生成する
   pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
      Self::Validation(vec![ValidationIssue::new(path, message)])
   }
}

impl From<DomainError> for TodoError {
   fn from(error: DomainError) -> Self {
      match error {
         DomainError::Validation(message) => Self::invalid("", message),
         DomainError::NotFound { .. } => Self::NotFound,
      }
   }
}

impl IntoResponse for TodoError {
   fn into_response(self) -> Response {
      match self {
         TodoError::Validation(issues) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse::new(issues)),
         )
            .into_response(),
         TodoError::NotFound => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response()
         }
         TodoError::Infra(e) => {
            tracing::error!(
               error.kind = %e.kind(),
               span_trace = %e.span_trace(),
               "ストアエラー: {}",
               e
            );
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(ErrorResponse::internal_error()),
            )
               .into_response()
         }
      }
   }
}
