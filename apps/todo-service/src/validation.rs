//! # 入力検証
//!
//! パスパラメータとリクエストボディを検証済みの入力型に変換する。
//!
//! ハンドラはここで定義する extractor と変換関数を通すため、
//! 不正な入力はユースケースに到達する前に 422 として拒否される。
//! ID の検証はストアの参照より先に行われるので、
//! 不正な ID に対して 404 が返ることはない。
//!
//! ## 検証結果の `path`
//!
//! | 対象 | `path` |
//! |------|--------|
//! | パスパラメータ | `"id"` |
//! | ボディのフィールド | フィールド名（`"content"` など） |
//! | ボディ全体（JSON 不正・オブジェクト以外） | `""` |

use axum::{
   Json,
   extract::{FromRequest, FromRequestParts, Path, Request},
   http::request::Parts,
};
use serde_json::{Map, Value};
use todo_api_domain::{
   DomainError,
   todo::{TodoContent, TodoId, TodoPatch},
};
use todo_api_shared::ValidationIssue;

use crate::{
   error::TodoError,
   usecase::todo::{CreateTodoInput, UpdateTodoInput},
};

/// 検証済みの Todo ID パスパラメータ
#[derive(Debug, Clone, Copy)]
pub struct TodoIdParam(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdParam
where
   S: Send + Sync,
{
   type Rejection = TodoError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      let Path(raw) = Path::<String>::from_request_parts(parts, state)
         .await
         .map_err(|rejection| TodoError::invalid("id", rejection.body_text()))?;

      raw.parse::<TodoId>()
         .map(Self)
         .map_err(|e| TodoError::invalid("id", domain_message(e)))
   }
}

/// JSON ボディ
///
/// `Content-Type` の欠落や構文エラーも含め、読み取りの失敗はすべて 422 にする。
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
   S: Send + Sync,
{
   type Rejection = TodoError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let Json(value) = Json::<Value>::from_request(req, state)
         .await
         .map_err(|rejection| TodoError::invalid("", rejection.body_text()))?;
      Ok(Self(value))
   }
}

/// 作成リクエストのボディを検証する
///
/// `content` は必須の空でない文字列。未知のフィールドは無視する。
pub fn create_input(body: Value) -> Result<CreateTodoInput, TodoError> {
   let fields = as_object(&body)?;
   let mut issues = Vec::new();

   let content = match fields.get("content") {
      Some(value) => parse_content(value, &mut issues),
      None => {
         issues.push(ValidationIssue::new("content", "内容は必須です"));
         None
      }
   };

   match content {
      Some(content) if issues.is_empty() => Ok(CreateTodoInput { content }),
      _ => Err(TodoError::Validation(issues)),
   }
}

/// 部分更新リクエストのボディを検証する
///
/// `content` / `completed` はどちらも省略可能。
/// 指定された場合は型と値を検証する（`null` は不正な値として扱う）。
pub fn update_input(id: TodoId, body: Value) -> Result<UpdateTodoInput, TodoError> {
   let fields = as_object(&body)?;
   let mut issues = Vec::new();

   let content = fields
      .get("content")
      .and_then(|value| parse_content(value, &mut issues));
   let completed = fields
      .get("completed")
      .and_then(|value| parse_completed(value, &mut issues));

   if !issues.is_empty() {
      return Err(TodoError::Validation(issues));
   }

   Ok(UpdateTodoInput {
      id,
      patch: TodoPatch { content, completed },
   })
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, TodoError> {
   body.as_object()
      .ok_or_else(|| TodoError::invalid("", "JSON オブジェクトである必要があります"))
}

fn parse_content(value: &Value, issues: &mut Vec<ValidationIssue>) -> Option<TodoContent> {
   let Some(text) = value.as_str() else {
      issues.push(ValidationIssue::new("content", "文字列である必要があります"));
      return None;
   };
   TodoContent::new(text)
      .map_err(|e| issues.push(ValidationIssue::new("content", domain_message(e))))
      .ok()
}

fn parse_completed(value: &Value, issues: &mut Vec<ValidationIssue>) -> Option<bool> {
   let completed = value.as_bool();
   if completed.is_none() {
      issues.push(ValidationIssue::new("completed", "真偽値である必要があります"));
   }
   completed
}

/// ドメインエラーから利用者向けのメッセージを取り出す
fn domain_message(error: DomainError) -> String {
   match error {
      DomainError::Validation(message) => message,
      other => other.to_string(),
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use serde_json::json;

   use super::*;

   fn issues(result: Result<impl std::fmt::Debug, TodoError>) -> Vec<ValidationIssue> {
      match result {
         Err(TodoError::Validation(issues)) => issues,
         other => panic!("検証エラーを期待したが {other:?} だった"),
      }
   }

   fn id(value: u64) -> TodoId {
      TodoId::new(value).unwrap()
   }

   #[test]
   fn test_create_inputは内容を受け付ける() {
      let input = create_input(json!({ "content": "  牛乳を買う " })).unwrap();

      assert_eq!(input.content.as_str(), "  牛乳を買う ");
   }

   #[test]
   fn test_create_inputは未知のフィールドを無視する() {
      let input = create_input(json!({ "content": "X", "completed": true, "id": 99 })).unwrap();

      assert_eq!(input.content.as_str(), "X");
   }

   #[rstest]
   #[case(json!({}), "内容は必須です")]
   #[case(json!({ "content": "" }), "内容は必須です")]
   #[case(json!({ "content": 1 }), "文字列である必要があります")]
   #[case(json!({ "content": null }), "文字列である必要があります")]
   fn test_create_inputは不正な内容を拒否する(#[case] body: Value, #[case] message: &str) {
      assert_eq!(
         issues(create_input(body)),
         vec![ValidationIssue::new("content", message)]
      );
   }

   #[rstest]
   #[case(json!([]))]
   #[case(json!("content"))]
   #[case(json!(null))]
   fn test_オブジェクト以外のボディはパス空文字で拒否する(#[case] body: Value) {
      assert_eq!(
         issues(create_input(body.clone())),
         vec![ValidationIssue::new("", "JSON オブジェクトである必要があります")]
      );
      assert_eq!(
         issues(update_input(id(1), body)),
         vec![ValidationIssue::new("", "JSON オブジェクトである必要があります")]
      );
   }

   #[test]
   fn test_update_inputは空のボディを何も変更しないパッチにする() {
      let input = update_input(id(1), json!({})).unwrap();

      assert_eq!(input.id, id(1));
      assert_eq!(input.patch, TodoPatch::default());
   }

   #[test]
   fn test_update_inputは指定されたフィールドのみを設定する() {
      let input = update_input(id(2), json!({ "completed": true })).unwrap();

      assert_eq!(
         input.patch,
         TodoPatch {
            content:   None,
            completed: Some(true),
         }
      );
   }

   #[test]
   fn test_update_inputはすべての問題を収集する() {
      let result = update_input(id(1), json!({ "content": 5, "completed": "yes" }));

      assert_eq!(
         issues(result),
         vec![
            ValidationIssue::new("content", "文字列である必要があります"),
            ValidationIssue::new("completed", "真偽値である必要があります"),
         ]
      );
   }

   #[rstest]
   #[case(json!({ "completed": null }))]
   #[case(json!({ "completed": 1 }))]
   #[case(json!({ "completed": "true" }))]
   fn test_update_inputは真偽値以外のcompletedを拒否する(#[case] body: Value) {
      assert_eq!(
         issues(update_input(id(1), body)),
         vec![ValidationIssue::new("completed", "真偽値である必要があります")]
      );
   }

   #[test]
   fn test_update_inputは空の内容を拒否する() {
      assert_eq!(
         issues(update_input(id(1), json!({ "content": "" }))),
         vec![ValidationIssue::new("content", "内容は必須です")]
      );
   }
}
