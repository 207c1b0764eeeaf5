// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use jobprep::config::settings::Settings;
use jobprep::domain::services::job_service::JobService;
use jobprep::domain::services::llm_service::LlmService;
use jobprep::engines::browser_engine::BrowserEngine;
use jobprep::infrastructure::repositories::job_repo_impl::SqliteJobRepository;
use jobprep::presentation::routes;
use jobprep::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobprep...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    if settings.llm.api_key.is_none() {
        warn!("No model API key configured; job analysis requests will fail");
    }

    // 3. Open the persistent job cache
    let repository = Arc::new(SqliteJobRepository::connect(&settings.cache.path).await?);
    info!("Job cache initialized");

    // 4. Initialize components; the store handle and services are built
    //    once here and injected explicitly
    let fetcher = Arc::new(BrowserEngine::new(settings.scraper.clone()));
    let llm = Arc::new(LlmService::new(&settings.llm));
    let job_service = Arc::new(JobService::new(repository, fetcher, llm));

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(Extension(job_service))
        .layer(Extension(settings.clone()));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
