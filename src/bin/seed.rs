use clap::Parser;
use phonebook::application::context::AppContext;
use phonebook::domain::services::person_validator::PersonValidator;
use phonebook::infrastructure::db::database::DatabaseError;
use phonebook::infrastructure::db::postgres::PostgresDatabase;
use phonebook::infrastructure::db::repositories::Repositories;
use phonebook::interface::cli::{SeedArgs, SeedError, run_seed};
use phonebook::telemetry;
use sqlx::postgres::PgConnectOptions;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum SeedFailure {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid database url: {0}")]
    Url(#[from] sqlx::Error),
    #[error("database: {0}")]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Step 1: Parse arguments first so usage errors never open a connection.
    let args = SeedArgs::parse();

    match seed(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn seed(args: SeedArgs) -> Result<(), SeedFailure> {
    // Step 2: Resolve the connection string and apply the credential.
    let settings = phonebook::config::load()?;
    telemetry::init_tracing(&settings.observability.log_filter);
    let options: PgConnectOptions = settings.db.url.parse()?;
    let options = options.password(&args.credential);

    // Step 3: Open a single-connection pool for the duration of the command.
    let db = Arc::new(PostgresDatabase::connect_with(options, 1).await?);
    info!("connected to database");

    // Step 4: Run the command, then close the pool whatever the outcome.
    let result = run(db.clone(), &settings, &args).await;
    db.close().await;
    result
}

async fn run(
    db: Arc<PostgresDatabase>,
    settings: &phonebook::config::Settings,
    args: &SeedArgs,
) -> Result<(), SeedFailure> {
    db.ensure_schema().await?;
    let ctx = AppContext::new(
        Repositories::postgres(db),
        PersonValidator::new(settings.validation.strict_number_format),
    );
    let mut stdout = std::io::stdout().lock();
    run_seed(&ctx, args.command(), &mut stdout).await?;
    Ok(())
}
