use contracts::shared::import::ImportConstraints;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub cache: CacheConfig,
    pub import: ImportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port on the same host the client was served from.
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_per_page: u32,
    pub page_size_options: Vec<u32>,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    pub volatile_ttl_secs: u32,
    pub reference_ttl_secs: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImportConfig {
    pub max_file_size_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Configuration compiled into the bundle.
const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000
prefix = "/api"

[list]
default_per_page = 20
page_size_options = [10, 20, 50, 100]
search_debounce_ms = 500

[cache]
volatile_ttl_secs = 30
reference_ttl_secs = 300

[import]
max_file_size_bytes = 5242880
allowed_extensions = ["xlsx", "xls", "csv"]

[logging]
level = "debug"
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Embedded config is invalid ({}), using defaults", e);
        AppConfig::default()
    }
});

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Process-wide configuration.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 5000,
                prefix: "/api".to_string(),
            },
            list: ListConfig {
                default_per_page: 20,
                page_size_options: vec![10, 20, 50, 100],
                search_debounce_ms: 500,
            },
            cache: CacheConfig {
                volatile_ttl_secs: 30,
                reference_ttl_secs: 300,
            },
            import: ImportConfig {
                max_file_size_bytes: 5 * 1024 * 1024,
                allowed_extensions: vec!["xlsx".into(), "xls".into(), "csv".into()],
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }

    pub fn import_constraints(&self) -> ImportConstraints {
        ImportConstraints {
            allowed_extensions: self.import.allowed_extensions.clone(),
            max_file_size_bytes: self.import.max_file_size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.list.search_debounce_ms, 500);
        assert_eq!(config.cache.volatile_ttl_secs, 30);
        assert_eq!(config.cache.reference_ttl_secs, 300);
    }

    #[test]
    fn test_log_level_falls_back_to_debug() {
        let mut config = AppConfig::default();
        config.logging.level = "warn".into();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.logging.level = "chatty".into();
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_import_constraints_follow_config() {
        let constraints = AppConfig::default().import_constraints();
        assert_eq!(constraints, ImportConstraints::default());
    }
}
