//! # Todo API 共有ユーティリティ
//!
//! サービス全体で使用される共通型とユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換はサービス側の責務）
//! - OpenAPI スキーマ（`openapi`）とトレーシング初期化（`observability`）は
//!   feature で有効化する

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, ValidationErrorResponse, ValidationIssue};
pub use health::HealthResponse;
