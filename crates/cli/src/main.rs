use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use quorum_dns_application::ResolveDomainUseCase;
use quorum_dns_domain::{AggregateResult, CliOverrides, Config, RecordType};
use quorum_dns_infrastructure::dns::{HttpsTransport, ResolverClient};
use tracing::info;

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "quorum-dns")]
#[command(version)]
#[command(about = "Cross-checked DNS lookups over multiple DoH resolvers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-resolver timeout in milliseconds (100-10000)
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a domain and print the most trustworthy answer
    Lookup {
        domain: String,

        /// Record type to query
        #[arg(short = 'r', long = "record-type", default_value = "A")]
        record_type: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Query every resolver and report each outcome in full
    Debug {
        domain: String,

        /// Record type to query
        #[arg(short = 'r', long = "record-type", default_value = "A")]
        record_type: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the configured DoH resolvers
    Servers,

    /// List the supported record types
    RecordTypes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        timeout_ms: cli.timeout,
        log_level: cli.log_level.clone(),
    };
    let config = Config::load(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config.logging);

    match cli.command {
        Command::Lookup {
            domain,
            record_type,
            json,
        } => {
            let record_type = parse_record_type(&record_type)?;
            let result = resolve(&config, &domain, record_type, config.query.timeout_ms).await?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::lookup_json(
                        &domain,
                        record_type,
                        &result
                    ))?
                );
            } else {
                output::print_lookup(&domain, record_type, &result);
            }

            if result.best.is_none() {
                std::process::exit(1);
            }
        }

        Command::Debug {
            domain,
            record_type,
            json,
        } => {
            let record_type = parse_record_type(&record_type)?;
            let result =
                resolve(&config, &domain, record_type, config.query.debug_timeout_ms).await?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::debug_json(
                        &domain,
                        record_type,
                        &result
                    ))?
                );
            } else {
                output::print_debug(&domain, record_type, &result);
            }
        }

        Command::Servers => {
            for resolver in &config.resolvers {
                println!("{}: {}", resolver.name, resolver.endpoint);
            }
            println!();
            println!("{} resolvers configured", config.resolvers.len());
        }

        Command::RecordTypes => {
            for rt in RecordType::ALL {
                println!("{:<6} {}", rt.as_str(), rt.description());
            }
        }
    }

    Ok(())
}

fn parse_record_type(s: &str) -> anyhow::Result<RecordType> {
    RecordType::from_str(s).map_err(|e| anyhow::anyhow!(e))
}

async fn resolve(
    config: &Config,
    domain: &str,
    record_type: RecordType,
    timeout_ms: u64,
) -> anyhow::Result<AggregateResult> {
    info!(
        domain = %domain,
        record_type = %record_type,
        resolvers = config.resolvers.len(),
        "Resolving"
    );

    let transport = Arc::new(HttpsTransport::new());
    let probe = Arc::new(ResolverClient::new(transport));
    let use_case = ResolveDomainUseCase::new(probe);

    use_case
        .execute(
            domain,
            record_type,
            Duration::from_millis(timeout_ms),
            &config.resolvers,
        )
        .await
        .context("resolution failed")
}
