use ferrous_doh_domain::{CliOverrides, Config};
use ferrous_doh_infrastructure::DohResolver;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.json {
        builder.json().try_init().ok();
    } else {
        builder.with_target(false).try_init().ok();
    }
}

pub fn build_resolver(config: &Config) -> DohResolver {
    match config.resolver.timeout {
        0 => DohResolver::new(config.resolver.url.as_str()),
        secs => DohResolver::with_timeout(
            config.resolver.url.as_str(),
            Duration::from_secs(secs),
        ),
    }
}

/// Configured headers as a request header set, or `None` so the resolver
/// falls back to its defaults.
pub fn request_headers(config: &Config) -> anyhow::Result<Option<HeaderMap>> {
    if config.resolver.headers.is_empty() {
        return Ok(None);
    }

    let mut headers = HeaderMap::with_capacity(config.resolver.headers.len());
    for (name, value) in &config.resolver.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| anyhow::anyhow!("Invalid header name '{}': {}", name, e))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| anyhow::anyhow!("Invalid value for header '{}': {}", name, e))?;
        headers.append(name, value);
    }

    Ok(Some(headers))
}
