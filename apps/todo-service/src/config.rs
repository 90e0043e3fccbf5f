//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `TODO_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `TODO_PORT` | No | `9999` | ポート番号 |
//! | `ENVIRONMENT` | No | `development` | 実行環境 |
//! | `BASE_URL_API` | No | `http://localhost:{TODO_PORT}` | 公開 URL（ウェルカムメッセージに使用） |
//! | `CORS_ALLOWED_ORIGIN` | No | `http://localhost:9999` | CORS で許可するオリジン |
//! | `SEED_TODOS` | No | `true` | 起動時に初期データを投入するか |
//!
//! ログ関連の `LOG_FORMAT` / `RUST_LOG` は
//! [`todo_api_shared::observability`] が読み込む。

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// ポート番号として解釈できない
   #[error("{name} は有効なポート番号である必要があります: {value:?}")]
   InvalidPort { name: &'static str, value: String },

   /// 真偽値として解釈できない
   #[error("{name} は true / false のいずれかである必要があります: {value:?}")]
   InvalidBool { name: &'static str, value: String },

   /// ヘッダー値として使用できないオリジン
   #[error("{name} は有効なオリジンである必要があります: {value:?}")]
   InvalidOrigin { name: &'static str, value: String },
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone)]
pub struct TodoConfig {
   /// バインドアドレス
   pub host:                String,
   /// ポート番号
   pub port:                u16,
   /// 実行環境（`development`, `production` など）
   pub environment:         String,
   /// 公開 URL
   pub base_url:            String,
   /// CORS で許可するオリジン
   pub cors_allowed_origin: HeaderValue,
   /// 起動時に初期データを投入するか
   pub seed_todos:          bool,
}

impl TodoConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// `lookup` は変数名を受け取り、未設定なら `None` を返す。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port = match lookup("TODO_PORT") {
         Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
            name: "TODO_PORT",
            value,
         })?,
         None => 9999,
      };

      let seed_todos = match lookup("SEED_TODOS") {
         Some(value) => parse_bool("SEED_TODOS", value)?,
         None => true,
      };

      let origin = lookup("CORS_ALLOWED_ORIGIN")
         .unwrap_or_else(|| "http://localhost:9999".to_string());
      let cors_allowed_origin =
         HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin {
            name:  "CORS_ALLOWED_ORIGIN",
            value: origin.clone(),
         })?;

      Ok(Self {
         host: lookup("TODO_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
         port,
         environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
         base_url: lookup("BASE_URL_API").unwrap_or_else(|| format!("http://localhost:{port}")),
         cors_allowed_origin,
         seed_todos,
      })
   }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
   if value.eq_ignore_ascii_case("true") || value == "1" {
      Ok(true)
   } else if value.eq_ignore_ascii_case("false") || value == "0" {
      Ok(false)
   } else {
      Err(ConfigError::InvalidBool { name, value })
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn load(vars: &[(&str, &str)]) -> Result<TodoConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      TodoConfig::from_lookup(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_未設定の場合はデフォルト値を使う() {
      let config = load(&[]).unwrap();

      assert_eq!(config.host, "0.0.0.0");
      assert_eq!(config.port, 9999);
      assert_eq!(config.environment, "development");
      assert_eq!(config.base_url, "http://localhost:9999");
      assert_eq!(config.cors_allowed_origin, "http://localhost:9999");
      assert!(config.seed_todos);
   }

   #[test]
   fn test_base_urlのデフォルトはポート番号に追従する() {
      let config = load(&[("TODO_PORT", "8080")]).unwrap();

      assert_eq!(config.port, 8080);
      assert_eq!(config.base_url, "http://localhost:8080");
   }

   #[test]
   fn test_環境変数の値で上書きできる() {
      let config = load(&[
         ("TODO_HOST", "127.0.0.1"),
         ("ENVIRONMENT", "production"),
         ("BASE_URL_API", "https://todo.example.com/api"),
         ("CORS_ALLOWED_ORIGIN", "https://app.example.com"),
         ("SEED_TODOS", "false"),
      ])
      .unwrap();

      assert_eq!(config.host, "127.0.0.1");
      assert_eq!(config.environment, "production");
      assert_eq!(config.base_url, "https://todo.example.com/api");
      assert_eq!(config.cors_allowed_origin, "https://app.example.com");
      assert!(!config.seed_todos);
   }

   #[rstest]
   #[case("abc")]
   #[case("70000")]
   #[case("")]
   fn test_不正なポート番号はエラーになる(#[case] value: &str) {
      assert_eq!(
         load(&[("TODO_PORT", value)]).unwrap_err(),
         ConfigError::InvalidPort {
            name:  "TODO_PORT",
            value: value.to_string(),
         }
      );
   }

   #[rstest]
   #[case("TRUE", true)]
   #[case("1", true)]
   #[case("False", false)]
   #[case("0", false)]
   fn test_seed_todosは真偽値をパースする(#[case] value: &str, #[case] expected: bool) {
      let config = load(&[("SEED_TODOS", value)]).unwrap();
      assert_eq!(config.seed_todos, expected);
   }

   #[test]
   fn test_seed_todosの不正値はエラーになる() {
      assert!(matches!(
         load(&[("SEED_TODOS", "yes")]),
         Err(ConfigError::InvalidBool { .. })
      ));
   }

   #[test]
   fn test_改行を含むオリジンはエラーになる() {
      assert!(matches!(
         load(&[("CORS_ALLOWED_ORIGIN", "http://a\nb")]),
         Err(ConfigError::InvalidOrigin { .. })
      ));
   }
}
