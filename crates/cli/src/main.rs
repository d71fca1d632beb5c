use clap::Parser;
use ferrous_doh_domain::{CliOverrides, RequestMethod};
use std::collections::BTreeMap;
use tracing::debug;

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "doh")]
#[command(version)]
#[command(about = "Ferrous DoH - resolve names over DNS-over-HTTPS (RFC 8484)")]
struct Cli {
    /// Domain name to resolve
    name: String,

    /// Record type (A, AAAA, MX, TXT, TYPE65280, ...)
    #[arg(default_value = "A")]
    record_type: String,

    /// DoH endpoint URL
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// HTTP method (GET or POST)
    #[arg(short = 'm', long, value_parser = parse_method)]
    method: Option<RequestMethod>,

    /// Request header "Name: value"; replaces the default headers (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Timeout in seconds, 0 disables it
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_method(value: &str) -> Result<RequestMethod, String> {
    value.parse().map_err(|e| format!("{}", e))
}

fn parse_header(value: &str) -> Result<(String, String), String> {
    let (name, value) = value
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got '{}'", value))?;

    let name = name.trim();
    if name.is_empty() {
        return Err("header name cannot be empty".to_string());
    }

    Ok((name.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        url: cli.url.clone(),
        method: cli.method,
        timeout: cli.timeout,
        headers: cli.headers.iter().cloned().collect::<BTreeMap<_, _>>(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        url = %config.resolver.url,
        method = %config.resolver.method,
        timeout = config.resolver.timeout,
        "Configuration loaded"
    );

    let resolver = bootstrap::build_resolver(&config);
    let headers = bootstrap::request_headers(&config)?;

    let response = resolver
        .query(
            &cli.name,
            &cli.record_type,
            config.resolver.method.as_str(),
            headers.as_ref(),
        )
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", output::DigOutput(&response));
    }

    Ok(())
}
