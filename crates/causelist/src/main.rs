//! # Causelist CLI
//!
//! Command-line interface for the causelist case-lookup service: run the
//! web server, or look up a case straight from the terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "causelist")]
#[command(version)]
#[command(about = "Delhi High Court case lookup over simulated records", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the lookup server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Audit database path
        #[arg(short, long)]
        db: Option<PathBuf>,

        /// Disable audit logging even if a database is configured
        #[arg(long)]
        no_audit: bool,

        /// Skip the simulated court-website delay
        #[arg(long)]
        no_latency: bool,
    },

    /// Look up a case and print the report
    Fetch {
        /// Case type slug (writ, civil, criminal, appeal, revision, misc)
        case_type: String,

        /// Case number (digits only)
        case_number: String,

        /// Filing year (2000 to current year)
        filing_year: String,

        /// Print the raw JSON record instead of a report
        #[arg(long)]
        json: bool,

        /// Skip the simulated court-website delay
        #[arg(long)]
        no_latency: bool,
    },

    /// Display version and component info
    Version,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set the audit database path
    SetDatabase {
        /// Path to the SQLite file
        path: String,
    },

    /// Clear the audit database path
    ClearDatabase,

    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging
    let telemetry_config =
        causelist_telemetry::TelemetryConfig::new("causelist").with_log_level(&cli.log_level);

    let telemetry_config = if cli.json_logs {
        telemetry_config.with_json_logs()
    } else {
        telemetry_config
    };

    causelist_telemetry::init_logging(&telemetry_config);

    // Load configuration for default values
    let cfg = config::Config::load();

    match cli.command {
        Commands::Serve {
            host,
            port,
            db,
            no_audit,
            no_latency,
        } => {
            // Fall back to config values when flags are not given
            let host = host.unwrap_or_else(|| cfg.server_host.clone());
            let port = port.unwrap_or(cfg.server_port);
            let db = db.or_else(|| cfg.database_path.clone());
            let simulate_latency = cfg.simulate_latency && !no_latency;
            commands::serve(host, port, db, no_audit, simulate_latency, cfg.cors).await?;
        }

        Commands::Fetch {
            case_type,
            case_number,
            filing_year,
            json,
            no_latency,
        } => {
            let simulate_latency = cfg.simulate_latency && !no_latency;
            commands::fetch(case_type, case_number, filing_year, json, simulate_latency).await?;
        }

        Commands::Version => {
            commands::version();
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::show_config();
            }
            ConfigAction::SetDatabase { path } => {
                let mut cfg = config::Config::load();
                match cfg.set_database_path(&path) {
                    Ok(()) => {
                        println!("Audit database set to: {}", path);
                        println!("Config saved to: {}", config::Config::config_path().display());
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::ClearDatabase => {
                let mut cfg = config::Config::load();
                match cfg.clear_database_path() {
                    Ok(()) => {
                        println!("Audit database cleared; lookups will not be recorded.");
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::Path => {
                println!("{}", config::Config::config_path().display());
            }
        },
    }

    Ok(())
}
