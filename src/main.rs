use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docrelay::application::ports::Archiver;
use docrelay::application::services::{AnalysisService, SizeGuard};
use docrelay::infrastructure::archive::ZipArchiver;
use docrelay::infrastructure::llm::OpenAiClient;
use docrelay::infrastructure::observability::{TracingConfig, init_tracing};
use docrelay::infrastructure::storage::SmartsheetClient;
use docrelay::infrastructure::text_processing::CompositeFileLoader;
use docrelay::presentation::{AccessGate, AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    let tracing_config = TracingConfig::new(environment.as_str(), settings.logging.enable_json)
        .with_default_filter(&settings.logging.level);
    init_tracing(&tracing_config)?;

    let attachment_source = Arc::new(SmartsheetClient::new(
        &settings.storage.base_url,
        &settings.storage.api_key,
        settings.storage.connect_timeout(),
        settings.storage.request_timeout(),
    )?);
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let llm_client = Arc::new(OpenAiClient::new(
        &settings.llm.base_url,
        &settings.llm.api_key,
        &settings.llm.chat_model,
        settings.llm.request_timeout(),
    )?);
    let archiver: Arc<dyn Archiver> = Arc::new(ZipArchiver::new());

    let analysis_service = Arc::new(AnalysisService::new(
        Arc::clone(&attachment_source),
        file_loader,
        llm_client,
        SizeGuard::new(archiver),
    ));

    let state = AppState {
        analysis_service,
        attachment_source,
        access_gate: AccessGate::new(&settings.access.secret),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server.host/server.port")?;
    tracing::info!(
        %addr,
        storage = %settings.storage.base_url,
        model = %settings.llm.chat_model,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT"),
        () = terminate => tracing::info!("Received SIGTERM"),
    }
}
