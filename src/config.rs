// file: src/config.rs
// description: application configuration management with toml and environment support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

const DB_ENV_KEYS: [&str; 8] = [
    "host", "port", "username", "password", "name", "table", "column", "timeout",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub db: DatabaseConfig,
    pub output: OutputConfig,
}

/// Connection and schema settings for the surname store.
///
/// Each field can be overridden by the matching `DB_*` variable
/// (`DB_HOST`, `DB_PORT`, `DB_USERNAME`, ...).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub table: String,
    pub column: String,
    /// Connect timeout in seconds
    pub timeout: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_stem: String,
    pub pretty_json: bool,
}

impl Config {
    /// Load configuration from defaults, an optional TOML file and the
    /// process environment (including a `.env` file if one exists).
    /// `DB_*` variables take precedence over everything else.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::build(path, None)
    }

    fn build(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())?;

        let mut builder = config::Config::builder().add_source(defaults);

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path));
            }
            None => {
                builder = builder
                    .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SURNAME_SEARCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env.clone()),
        );

        // Only the known `DB_*` names are read; unrelated variables such as
        // `DB_PORT_3306_TCP` are ignored.
        for key in DB_ENV_KEYS {
            let var = format!("DB_{}", key.to_uppercase());
            let value = match &env {
                Some(vars) => vars.get(&var).cloned(),
                None => std::env::var(&var).ok(),
            };
            builder = builder.set_override_option(format!("db.{}", key), value)?;
        }

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            db: DatabaseConfig::default(),
            output: OutputConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_port(self.db.port)
            .map_err(|e| SearchError::Config(format!("db.port: {}", e)))?;
        Validator::validate_identifier(&self.db.table)
            .map_err(|e| SearchError::Config(format!("db.table: {}", e)))?;
        Validator::validate_identifier(&self.db.column)
            .map_err(|e| SearchError::Config(format!("db.column: {}", e)))?;
        Validator::validate_file_stem(&self.output.file_stem)
            .map_err(|e| SearchError::Config(format!("output.file_stem: {}", e)))?;

        if self.db.timeout == 0 {
            return Err(SearchError::Config(
                "db.timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            username: String::new(),
            password: String::new(),
            name: "name".to_string(),
            table: "name".to_string(),
            column: "last_name".to_string(),
            timeout: 5,
        }
    }
}

impl DatabaseConfig {
    /// MySQL connection URL with percent-encoded credentials.
    pub fn connection_url(&self) -> String {
        let credentials = match (self.username.is_empty(), self.password.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!("{}@", urlencoding::encode(&self.username)),
            _ => format!(
                "{}:{}@",
                urlencoding::encode(&self.username),
                urlencoding::encode(&self.password)
            ),
        };

        format!(
            "mysql://{}{}:{}/{}",
            credentials,
            self.host,
            self.port,
            urlencoding::encode(&self.name)
        )
    }

    /// Connection URL safe for logs.
    pub fn redacted_url(&self) -> String {
        let user = if self.username.is_empty() {
            String::new()
        } else {
            format!("{}@", self.username)
        };
        format!("mysql://{}{}:{}/{}", user, self.host, self.port, self.name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_stem: "SearchResults".to_string(),
            pretty_json: false,
        }
    }
}
