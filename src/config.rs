use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Allowed CORS origins. `*` allows any origin.
    /// Set REGISTRATION__API__CORS_ALLOWED_ORIGINS to narrow it in production.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_bind() -> String { "127.0.0.1".to_string() }
fn default_api_port() -> u16 { 5000 }
fn default_db_url() -> String { "sqlite://registrations.db".to_string() }
fn default_max_connections() -> u32 { 5 }
fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn validate(cfg: &Config) -> Result<()> {
    if !cfg.database.url.starts_with("sqlite:") {
        anyhow::bail!(
            "CONFIG ERROR: database url must use the sqlite: scheme (got '{}')",
            cfg.database.url
        );
    }

    if cfg.database.max_connections == 0 {
        anyhow::bail!("CONFIG ERROR: database.max_connections must be at least 1");
    }

    if cfg.api.port == 0 {
        anyhow::bail!("CONFIG ERROR: api.port must not be 0");
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

pub fn load() -> Result<Config> {
    // .env is optional; a missing file is not an error
    dotenv::dotenv().ok();

    let cfg = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(
            config::Environment::with_prefix("REGISTRATION")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("api.cors_allowed_origins"),
        )
        .set_default("api.bind", default_bind())?
        .set_default("api.port", i64::from(default_api_port()))?
        .set_default("api.cors_allowed_origins", default_cors_allowed_origins())?
        .set_default("database.url", default_db_url())?
        .set_default("database.max_connections", i64::from(default_max_connections()))?
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .build()?
        .try_deserialize()?;

    validate(&cfg)?;

    Ok(cfg)
}
