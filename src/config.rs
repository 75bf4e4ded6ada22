use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Development fallbacks. Production deployments must override both via
/// `PROPBOWL__AUTH__ADMIN_PASSWORD` and `PROPBOWL__AUTH__SESSION_SECRET`.
pub const DEFAULT_ADMIN_PASSWORD: &str = "changeme-dev";
pub const DEFAULT_SESSION_SECRET: &str = "propbowl-dev-session-secret";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Single shared admin password for the whole deployment.
    pub admin_password: String,
    /// HMAC secret used to sign admin session tokens.
    pub session_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://propbowl.db?mode=rwc")?
            .set_default("auth.admin_password", DEFAULT_ADMIN_PASSWORD)?
            .set_default("auth.session_secret", DEFAULT_SESSION_SECRET)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PROPBOWL__AUTH__ADMIN_PASSWORD)
            .add_source(Environment::with_prefix("PROPBOWL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
