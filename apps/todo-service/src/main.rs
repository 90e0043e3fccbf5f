//! # Todo Service サーバー
//!
//! Todo をインメモリで管理する HTTP API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/` | ウェルカムメッセージ |
//! | GET | `/health` | ヘルスチェック |
//! | GET | `/doc` | OpenAPI 仕様（JSON） |
//! | GET / POST | `/todo/` | Todo 一覧・作成 |
//! | GET / PATCH / DELETE | `/todo/{id}` | Todo 取得・部分更新・削除 |
//!
//! データはプロセス内にのみ保持し、再起動すると初期状態に戻る。
//! 環境変数は [`todo_api_service::config`] を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todo-api-service
//!
//! # 初期データなし・JSON ログ
//! SEED_TODOS=false LOG_FORMAT=json cargo run -p todo-api-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todo_api_infra::repository::{InMemoryTodoRepository, TodoRepository};
use todo_api_service::{app_builder::build_app, config::TodoConfig};
use todo_api_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("todo-service");
   init_tracing(&tracing_config);
   let _tracing_guard =
      tracing::info_span!("app", service = %tracing_config.service_name).entered();

   // 設定読み込み
   let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      environment = %config.environment,
      "Todo Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let repository: Arc<dyn TodoRepository> = if config.seed_todos {
      Arc::new(InMemoryTodoRepository::seeded())
   } else {
      Arc::new(InMemoryTodoRepository::new())
   };

   let app = build_app(&config, repository);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Todo Service サーバーが起動しました: {}", addr);
   tracing::info!("API ドキュメント: {}/doc", config.base_url);

   axum::serve(listener, app).await?;

   Ok(())
}
