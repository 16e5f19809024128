use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main entry point for the product catalog service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_config(cli.config.as_deref())?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Configuration loaded");

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            settings.server.apply_overrides(args.host, args.port);
            settings.validate()?;
            web_server::run_server(settings).await?;
        }
        Commands::Migrate => {
            settings.validate()?;
            let db_pool = database::connect(&settings.database).await?;
            database::run_migrations(&db_pool).await?;
            database::close(db_pool).await;
        }
        Commands::CheckConfig => {
            settings.validate()?;
            let addr = settings.server.socket_addr()?;
            println!("Configuration is valid. Server would listen on {addr}.");
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small REST API over the product table.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to read instead of `config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve(ServeArgs),
    /// Apply database migrations and exit.
    Migrate,
    /// Load and validate the configuration, then exit.
    CheckConfig,
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Overrides `server.port`.
    #[arg(long)]
    port: Option<u16>,
}
