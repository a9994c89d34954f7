use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Top-level application configuration loaded from files + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Two JSON files feed the loader: database credentials and the server
    /// binding. Either may be absent, in which case defaults apply. Any
    /// value can also be overridden through `REGDEADLINES_*` variables.
    pub fn load() -> Result<Self> {
        let db_path = env::var("REGDEADLINES_DB_CONFIG")
            .unwrap_or_else(|_| "config/db_config.json".to_string());
        let api_path = env::var("REGDEADLINES_API_CONFIG")
            .unwrap_or_else(|_| "config/api_config.json".to_string());

        Self::from_files(Path::new(&db_path), Path::new(&api_path))
    }

    /// Load configuration from explicit file paths.
    pub fn from_files(db_path: &Path, api_path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        for path in [db_path, api_path] {
            if path.exists() {
                builder = builder.add_source(config::File::from(PathBuf::from(path)));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("REGDEADLINES")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build().context("failed to read configuration")?;
        let mut config: Self = settings
            .try_deserialize()
            .context("invalid configuration")?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database.database_name.trim().is_empty() {
            bail!("database.database_name must be specified");
        }

        // The table name is interpolated into the SELECT statement, so it
        // must be a plain identifier rather than arbitrary SQL.
        if !is_sql_identifier(&self.database.table_name) {
            bail!(
                "database.table_name '{}' is not a plain SQL identifier",
                self.database.table_name
            );
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database_name: String,
    pub table_name: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database_name: "voter_registration".to_string(),
            table_name: "VoterRegistrationDeadlines".to_string(),
            max_connections: 5,
            run_migrations: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
