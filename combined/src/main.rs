//! Product catalog server: HTTP API plus database migration commands.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_service_lib::TokenIssuer;
use common::{AppConfig, Database, DatabaseConfig};
use gateway_lib::AppState;
use product_service_lib::ProductStore;
use user_service_lib::UserStore;

#[derive(Parser)]
#[command(name = "product-crud")]
#[command(about = "Product catalog CRUD service")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, env = "SERVER_HOST")]
        host: Option<String>,
        #[arg(long, env = "SERVER_PORT")]
        port: Option<u16>,
    },
    /// Manage the database schema
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => serve(host, port).await?,
        Commands::Migrate { action } => migrate(action).await?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug".to_string()
    } else {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        format!("{},tower_http=debug", level)
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.service.host = host;
    }
    if let Some(port) = port {
        config.service.port = port;
    }

    let database = Arc::new(Database::connect(&config.database).await?);
    let users = Arc::new(UserStore::new(database.get_connection()));
    let products = Arc::new(ProductStore::new(database.get_connection()));
    let tokens = Arc::new(TokenIssuer::new(&config.jwt));

    let state = AppState::new(users, products, tokens).with_database(database);

    let addr: SocketAddr = config.service.address().parse()?;
    info!(service = %config.service.service_name, "Starting on http://{}", addr);

    gateway_lib::run_server(addr, state).await
}

async fn migrate(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let db = Database::connect_without_migrations(&config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
