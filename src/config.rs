use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub db: Db,
    pub validation: Validation,
    pub observability: Observability,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
    /// Directory holding the built front-end bundle.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Db {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Validation {
    /// Enforce minimum lengths and the `NN-NNNNNN` number pattern.
    pub strict_number_format: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Observability {
    pub enable_metrics: bool,
    pub log_filter: String,
}

/// Load settings from the process environment.
pub fn load() -> Result<Settings, config::ConfigError> {
    load_with(&std::env::vars().collect())
}

/// Load settings from built-in defaults, `config/default.toml`,
/// `config/<APP_ENV>.toml`, `PHONEBOOK__*` variables, and finally the
/// conventional `DATABASE_URL` and `PORT` variables.
pub fn load_with(vars: &HashMap<String, String>) -> Result<Settings, config::ConfigError> {
    let env_name = vars.get("APP_ENV").map(String::as_str).unwrap_or("dev");
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3001)?
        .set_default("server.static_dir", "dist")?
        .set_default("db.max_connections", 5)?
        .set_default("validation.strict_number_format", false)?
        .set_default("observability.enable_metrics", true)?
        .set_default("observability.log_filter", "info")?
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{env_name}")).required(false))
        .add_source(
            config::Environment::with_prefix("PHONEBOOK")
                .separator("__")
                .source(Some(vars.clone().into_iter().collect())),
        )
        .set_override_option("db.url", vars.get("DATABASE_URL").cloned())?
        .set_override_option("server.port", vars.get("PORT").cloned())?
        .build()?
        .try_deserialize()
}
