//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 形式
//!
//! | 型 | JSON | 用途 |
//! |---|------|------|
//! | [`ErrorResponse`] | `{ "code": 404, "message": "Not Found" }` | 404 / 500 など |
//! | [`ValidationErrorResponse`] | `{ "code": 422, "message": "...", "issues": [...] }` | 入力検証エラー |
//!
//! よく使うエラーは便利コンストラクタで提供し、ステータスとメッセージの
//! 組み合わせのハードコードを排除する。

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// `code` は HTTP ステータスコード、`message` はステータスの説明。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = 404))]
    pub code:    u16,
    #[cfg_attr(feature = "openapi", schema(example = "Not Found"))]
    pub message: String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 404 Not Found（リソースが存在しない）
    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    /// 404 Not Found（ルートが存在しない）
    ///
    /// リクエストされたパスをメッセージに含める。
    pub fn route_not_found(path: &str) -> Self {
        Self::new(404, format!("Not Found - {path}"))
    }

    /// 500 Internal Server Error
    ///
    /// message は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

/// 入力検証エラーの 1 項目
///
/// `path` は問題のあるフィールド名（パスパラメータは `"id"`、
/// ボディ全体の問題は空文字列）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationIssue {
    #[cfg_attr(feature = "openapi", schema(example = "content"))]
    pub path:    String,
    #[cfg_attr(feature = "openapi", schema(example = "内容は必須です"))]
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path:    path.into(),
            message: message.into(),
        }
    }
}

/// 422 Unprocessable Entity のレスポンス
///
/// [`ErrorResponse`] の形式にフィールド単位の検証結果 `issues` を加えたもの。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = 422))]
    pub code:    u16,
    #[cfg_attr(feature = "openapi", schema(example = "Unprocessable Entity"))]
    pub message: String,
    pub issues:  Vec<ValidationIssue>,
}

impl ValidationErrorResponse {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self {
            code: 422,
            message: "Unprocessable Entity".to_string(),
            issues,
        }
    }
}
