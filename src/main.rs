use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ratemyschedule::{create_router, AppState, Config};

const DEFAULT_LOG_FILTER: &str = "ratemyschedule=debug,tower_http=debug,axum::rejection=trace";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let json_logs = std::env::var("LOG_JSON")
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    init_tracing(json_logs);

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting RateMySchedule API");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Max file size: {}MB", config.max_file_size_mb);
    tracing::info!("Allowed origin: {}", config.allowed_origin);

    let addr = config.bind_addr();
    let state = AppState::new(config).await?;
    tracing::info!(ocr_available = state.ocr_available(), "Application state initialised");

    let app = create_router(state)?;

    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}
