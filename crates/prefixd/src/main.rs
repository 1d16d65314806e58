//! # Prefixd CLI
//!
//! Command-line interface for the prefixd originated-prefix lookup service.

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "prefixd")]
#[command(version)]
#[command(about = "Originated-prefix lookups backed by RIPE RIS", long_about = None)]
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

        /// RIS endpoint to query
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Look up the prefixes originated by an ASN and print them
    Lookup {
        /// The resource to look up (e.g. 13335 or AS13335)
        resource: String,

        /// Address family to select (ipv4 or ipv6)
        #[arg(short = 't', long = "type", default_value = "ipv4")]
        family: String,

        /// RIS endpoint to query
        #[arg(short, long)]
        endpoint: Option<String>,
    },

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

    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging
    let telemetry_config = prefixd_telemetry::TelemetryConfig::new("prefixd")
        .with_log_level(&cli.log_level);

    let telemetry_config = if cli.json_logs {
        telemetry_config.with_json_logs()
    } else {
        telemetry_config
    };

    prefixd_telemetry::init_logging(&telemetry_config);

    // Load configuration for default values
    let cfg = config::Config::load();

    match cli.command {
        Commands::Serve {
            host,
            port,
            endpoint,
        } => {
            let host = host.unwrap_or_else(|| cfg.server_host.clone());
            let port = port.unwrap_or(cfg.server_port);
            let endpoint = endpoint.unwrap_or_else(|| cfg.ris_endpoint.clone());
            commands::serve(host, port, endpoint).await?;
        }

        Commands::Lookup {
            resource,
            family,
            endpoint,
        } => {
            let endpoint = endpoint.unwrap_or_else(|| cfg.ris_endpoint.clone());
            commands::lookup(resource, family, endpoint).await?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::show_config();
            }
            ConfigAction::Path => {
                println!("{}", config::Config::config_path().display());
            }
        },
    }

    Ok(())
}
