use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Demo data loaded at startup: two rooms plus bookings that keep both
/// rooms taken over `[today + occupied_from_days, today + occupied_to_days]`.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
    #[serde(default = "default_occupied_from")]
    pub occupied_from_days: u64,
    #[serde(default = "default_occupied_to")]
    pub occupied_to_days: u64,
}

fn default_occupied_from() -> u64 {
    4
}

fn default_occupied_to() -> u64 {
    14
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("HOTELIER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
