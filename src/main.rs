use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ratelimitx::{BulkFormat, ClientConfig, RateLimitCheckRequest, RateLimitXClient};

/// Command line client for a RateLimitX service.
#[derive(Debug, Parser)]
#[command(name = "ratelimitx", version, about)]
struct Cli {
    /// Configuration file (YAML, TOML or JSON); RATELIMITX_* env vars override it
    #[arg(short, long)]
    config: Option<String>,

    /// Service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// API key, sent as X-API-Key
    #[arg(long)]
    api_key: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a rate limit
    Check {
        identifier: String,
        resource: String,
        #[arg(short, long, default_value_t = 1)]
        tokens: u32,
    },
    /// Service liveness
    Health,
    /// API usage of the configured key
    Usage,
    /// List rate limit rules
    Rules,
    /// Real-time analytics
    Analytics,
    /// Most frequently denied identifiers
    Top {
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Export rules to stdout
    Export {
        #[arg(short, long, default_value = "json")]
        format: BulkFormat,
    },
    /// Import rules from a file
    Import {
        file: String,
        /// Defaults to the file extension
        #[arg(short, long)]
        format: Option<BulkFormat>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = ClientConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(api_key) = cli.api_key {
        config.api_key = Some(api_key);
    }
    debug!(base_url = %config.base_url, "Configuration loaded");

    let client = RateLimitXClient::with_config(config)?;

    match cli.command {
        Command::Check { identifier, resource, tokens } => {
            let request = RateLimitCheckRequest::new(identifier, resource).with_tokens(tokens);
            match client.check(&request).await {
                Ok(decision) => print_json(&decision)?,
                Err(e) if e.is_rate_limited() => {
                    info!("Rate limited");
                    println!("denied: {}", e);
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Health => println!("{}", client.health().await?),
        Command::Usage => print_json(&client.get_usage().await?)?,
        Command::Rules => print_json(&client.get_rules().await?)?,
        Command::Analytics => print_json(&client.get_realtime_analytics().await?)?,
        Command::Top { limit } => print_json(&client.get_top_identifiers(limit).await?)?,
        Command::Export { format } => print!("{}", client.export_rules(format).await?),
        Command::Import { file, format } => {
            let format = match format {
                Some(format) => format,
                None => format_from_extension(&file)?,
            };
            let content = std::fs::read(&file).with_context(|| format!("Failed to read {}", file))?;
            let result = client.import_rules(content, format).await?;
            print_json(&result)?;
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn format_from_extension(file: &str) -> anyhow::Result<BulkFormat> {
    let ext = std::path::Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .context("Cannot infer format without a file extension, pass --format")?;
    Ok(ext.parse()?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
