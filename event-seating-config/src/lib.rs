use core::fmt::{Debug, Display};
use core::num::NonZeroU32;
use core::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "seating.toml";
pub const ENV_PREFIX: &str = "SEATING_";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TablesConfig {
    pub count: u32,
    pub capacity: NonZeroU32,
    pub name_prefix: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            count: 8,
            capacity: NonZeroU32::MIN.saturating_add(7),
            name_prefix: "Mesa".to_owned(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub participants: usize,
    /// Fixed seed for reproducible fixtures; random when unset.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            participants: 25,
            rng_seed: None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DraftingConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl DraftingConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_owned(),
            model: "gemini-2.5-flash".to_owned(),
            api_key: None,
            timeout_ms: 10_000,
        }
    }
}

// keeps the api key out of logs
impl Debug for DraftingConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DraftingConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub tables: TablesConfig,
    pub seed: SeedConfig,
    pub drafting: DraftingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            tables: TablesConfig::default(),
            seed: SeedConfig::default(),
            drafting: DraftingConfig::default(),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Defaults, overridden by `seating.toml`, overridden by `SEATING_*`
/// environment variables (`__` separates nested keys, e.g.
/// `SEATING_DRAFTING__API_KEY`).
#[must_use]
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(figment().extract()?)
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::{get_config, Config};

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = get_config().map_err(|err| err.to_string())?;
            assert_eq!(config, Config::default());
            assert_eq!(config.tables.count, 8);
            assert_eq!(config.tables.capacity.get(), 8);
            assert_eq!(config.seed.participants, 25);
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "seating.toml",
                r#"
                log_level = "debug"

                [tables]
                count = 4
                capacity = 10

                [drafting]
                model = "gemini-test"
                "#,
            )?;
            jail.set_env("SEATING_TABLES__CAPACITY", "12");
            jail.set_env("SEATING_DRAFTING__API_KEY", "secret");

            let config = get_config().map_err(|err| err.to_string())?;
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.tables.count, 4);
            assert_eq!(config.tables.capacity.get(), 12);
            assert_eq!(config.tables.name_prefix, "Mesa");
            assert_eq!(config.drafting.model, "gemini-test");
            assert_eq!(config.drafting.api_key.as_deref(), Some("secret"));
            assert!(!format!("{:?}", config.drafting).contains("secret"));
            Ok(())
        });
    }

    #[test]
    fn zero_capacity_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("SEATING_TABLES__CAPACITY", "0");
            assert!(get_config().is_err());
            Ok(())
        });
    }
}
