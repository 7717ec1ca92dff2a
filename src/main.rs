use activities::{build_router, AppState, InMemoryActivityRepository, ServerConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "activities=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    info!(
        host = %config.host,
        port = config.port,
        static_dir = %config.static_dir.display(),
        "Starting Mergington activities server"
    );

    // Registry lives for the process lifetime; nothing is persisted
    let activity_repository = Arc::new(InMemoryActivityRepository::seeded());
    match activity_repository.activity_count() {
        Ok(activity_count) => info!(activity_count, "Activity registry seeded"),
        Err(e) => {
            error!(error = %e, "Activity registry unavailable after seeding");
            return ExitCode::FAILURE;
        }
    }

    let app_state = AppState::new(activity_repository);
    let app = build_router(app_state, &config.static_dir);

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    info!("Server running on http://{}", address);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
