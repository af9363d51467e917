use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "server", about = "Serve talent-to-job match rankings over HTTP")]
pub struct Args {
    /// Catalog directory produced by `ranker build`
    #[arg(long, env = "MATCH_CATALOG", default_value = "./catalog")]
    pub catalog: PathBuf,
    /// Host to bind
    #[arg(long, env = "MATCH_HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// Port to bind
    #[arg(long, env = "MATCH_PORT", default_value_t = 8080)]
    pub port: u16,
    /// Result count when a request omits `limit`
    #[arg(long, env = "MATCH_DEFAULT_LIMIT", default_value_t = 10)]
    pub default_limit: i64,
    /// Upper bound applied to any requested `limit`
    #[arg(long, env = "MATCH_MAX_LIMIT", default_value_t = 100)]
    pub max_limit: i64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub catalog_dir: PathBuf,
    pub default_limit: i64,
    pub max_limit: i64,
    pub admin_token: Option<String>,
    /// Comma-separated origins; `None` allows any origin.
    pub cors_allow_origin: Option<String>,
}

impl ServerConfig {
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
            default_limit: 10,
            max_limit: 100,
            admin_token: None,
            cors_allow_origin: None,
        }
    }

    /// Build from parsed args plus `ADMIN_TOKEN` and `CORS_ALLOW_ORIGIN`.
    pub fn from_args(args: &Args) -> Self {
        Self {
            catalog_dir: args.catalog.clone(),
            default_limit: args.default_limit,
            max_limit: args.max_limit,
            admin_token: std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
            cors_allow_origin: std::env::var("CORS_ALLOW_ORIGIN").ok(),
        }
    }

    /// Requested limit, defaulted and capped. Non-positive values pass through.
    pub fn effective_limit(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}
