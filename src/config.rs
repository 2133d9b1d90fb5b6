//! Configuration management for Bookshelf server

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres connection URL. Empty selects the in-memory store.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GoogleBooksConfig {
    /// Base URL of the volumes API, without the trailing `/volumes`
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

/// How add-by-id resolves a provider identifier
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    /// Search with the identifier as free text and pick the exact id match
    #[default]
    Search,
    /// Fetch the volume by id
    Direct,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    pub lookup: LookupStrategy,
    /// Page size of the search used by the `search` lookup strategy
    pub lookup_page_size: i32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Answer every add-by-id failure with a bare 400
    pub collapse_add_errors: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub google_books: GoogleBooksConfig,
    pub catalog: CatalogConfig,
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(env::vars().collect())
    }

    /// Load configuration with `vars` standing in for the process environment
    pub fn from_env(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let run_mode = vars
            .get("RUN_MODE")
            .cloned()
            .unwrap_or_else(|| "development".into());
        let database_url = vars.get("DATABASE_URL").cloned();
        let google_books_base_url = vars.get("GOOGLE_BOOKS_BASE_URL").cloned();

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKSHELF_SERVER__PORT=9000 etc.
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("database.url", database_url)?
            .set_override_option("google_books.base_url", google_books_base_url)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for GoogleBooksConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.googleapis.com/books/v1".to_string(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            lookup: LookupStrategy::Search,
            lookup_page_size: 10,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            collapse_add_errors: true,
        }
    }
}
