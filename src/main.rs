use phonebook::application::context::AppContext;
use phonebook::domain::services::person_validator::PersonValidator;
use phonebook::infrastructure::db::database::DatabaseError;
use phonebook::infrastructure::db::postgres::PostgresDatabase;
use phonebook::infrastructure::db::repositories::Repositories;
use phonebook::interface::http;
use phonebook::interface::http::state::AppState;
use phonebook::telemetry;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database: {0}")]
    Database(#[from] DatabaseError),
    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Step 1: Load configuration and start logging.
    let settings = phonebook::config::load()?;
    telemetry::init_tracing(&settings.observability.log_filter);

    // Step 2: Connect to the database and make sure the table exists.
    let db = Arc::new(
        PostgresDatabase::connect(&settings.db.url, settings.db.max_connections).await?,
    );
    db.ensure_schema().await?;
    info!("connected to database");

    // Step 3: Build repositories and the shared context.
    let repos = Repositories::postgres(db.clone());
    let validator = PersonValidator::new(settings.validation.strict_number_format);
    let ctx = AppContext::new(repos, validator);

    // Step 4: Metrics recorder (optional).
    let metrics = if settings.observability.enable_metrics {
        match telemetry::init_metrics() {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!(error = %err, "metrics recorder not installed");
                None
            }
        }
    } else {
        None
    };

    // Step 5: Build the HTTP app.
    let state = AppState {
        ctx: Arc::new(ctx),
        metrics,
    };
    let app = http::app(state, &settings.server.static_dir);
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Step 6: Bind and serve until interrupted, then release the pool.
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Server running on port {}", settings.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
