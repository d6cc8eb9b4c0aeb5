use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brownbear::assets::{ingest::ingest_directory, AssetStore};
use brownbear::config::Config;
use brownbear::error::Result;
use brownbear::web::{self, AppState};
use brownbear::{admin, db, seed};

#[derive(Parser)]
#[command(author, version, about = "Brown Bear content server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (the default)
    Serve,
    /// Create the database schema
    Init,
    /// Seed book content once, then ingest static files
    Seed,
    /// Load a directory tree into the asset store
    Ingest {
        /// Source directory (defaults to the configured static dir)
        dir: Option<PathBuf>,
    },
    /// Drop and recreate the schema (destructive)
    Reset {
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Copy the database file to a timestamped backup
    Backup {
        /// Destination path (defaults to data_dir/backups/app-<stamp>.db)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Copy a backup over the live database (destructive)
    Restore {
        path: PathBuf,
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Verify database connectivity and data-directory writability
    Health,
    /// Report defaulted or insecure configuration settings
    CheckConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brownbear=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match run(cli.command.unwrap_or(Command::Serve), config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: Config) -> Result<ExitCode> {
    match command {
        Command::Serve => {
            config.validate()?;
            let db = db::init_database(&config.database_path).await?;
            serve(config, db).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Init => {
            db::init_database(&config.database_path).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Seed => {
            let db = db::init_database(&config.database_path).await?;
            seed::seed(&db, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ingest { dir } => {
            let db = db::init_database(&config.database_path).await?;
            let store = AssetStore::new(db);
            let dir = dir.unwrap_or_else(|| config.static_dir.clone());
            let report = ingest_directory(&store, &dir).await?;
            if report.failed > 0 {
                tracing::warn!("{} of {} files failed", report.failed, report.total);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Reset { yes } => {
            let db = db::init_database(&config.database_path).await?;
            admin::reset(&db, yes).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Backup { out } => {
            admin::backup(&config, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Restore { path, yes } => {
            admin::restore(&config, &path, yes)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => {
            let db = db::init_database(&config.database_path).await?;
            admin::health_check(&db, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckConfig => {
            let defects = admin::check_config(&config);
            if defects == 0 {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

async fn serve(config: Config, db: sea_orm::DatabaseConnection) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| brownbear::ServerError::Config(format!("invalid bind address: {e}")))?;

    let state = Arc::new(AppState::new(db, config));
    let asset_count = state.assets.count().await?;
    if asset_count == 0 {
        tracing::info!("Asset store is empty; run the seed or ingest command to populate it");
    } else {
        tracing::info!("Serving {asset_count} assets from the database");
    }

    let app = web::router(state);

    tracing::info!("Brown Bear server starting on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives ctrl-c, letting axum drain in-flight
/// requests instead of reacting to a global flag.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
