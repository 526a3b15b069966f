use std::sync::Arc;

use study_assist::assistant::ContextRouter;
use study_assist::config::ServerConfig;
use study_assist::server::{api_routes, AppState};
use study_assist::workspace::WorkspaceStore;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env();

    eprintln!("📚 Study Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://{}:{}/api", config.bind_addr, config.port);
    eprintln!("   Chat: POST /api/assistant/chat");

    let store = if config.seed_demo_data {
        eprintln!("   Demo data: seeded");
        WorkspaceStore::seeded().await
    } else {
        eprintln!("   Demo data: disabled");
        WorkspaceStore::new()
    };

    let router = Arc::new(ContextRouter::new(Some(Arc::clone(&store))));

    let app = api_routes(AppState { store, router }).layer(CorsLayer::permissive());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.bind_addr, config.port)).await?;
    tracing::info!(port = config.port, "Dashboard API server started");
    axum::serve(listener, app).await?;

    Ok(())
}
