//! Configuration management for the Collaborators API.
//!
//! Settings are merged from several sources, later ones overriding earlier:
//! 1. Default configuration (embedded in binary)
//! 2. System-wide configuration file (`/etc/collaborators/config.toml`)
//! 3. User-specified configuration file (`--config`)
//! 4. Environment variables (prefixed with `COLLABORATORS_`, `__` between
//!    nested keys, e.g. `COLLABORATORS_DATA__PATH`)
//! 5. Command-line arguments

use clap::Parser;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");
const DEFAULT_CONFIG_PATH: &str = "/etc/collaborators/config.toml";

/// Command-line arguments parser.
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Server host address
    #[arg(long, env = "COLLABORATORS_SERVER_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "COLLABORATORS_SERVER_PORT")]
    pub port: Option<u16>,

    /// Path to the users CSV file
    #[arg(long, value_name = "FILE", env = "COLLABORATORS_DATA_PATH")]
    pub data_path: Option<PathBuf>,

    /// Start with an empty roster instead of loading the CSV file
    #[arg(long)]
    pub skip_initial_load: bool,

    /// Log level or filter directive (e.g. "info", "roster_core=debug")
    #[arg(long, env = "COLLABORATORS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, value_name = "DIR", env = "COLLABORATORS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Complete service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// Network interface and port for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Roster data source.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Users CSV file, relative to the working directory unless absolute
    pub path: PathBuf,
    /// Load the file before accepting requests
    #[serde(default = "default_load_on_startup")]
    pub load_on_startup: bool,
}

/// Log output options.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter, overridden by `RUST_LOG` when set
    pub level: String,
    /// Directory for the rolling log file; empty or absent disables file output
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

fn default_load_on_startup() -> bool {
    true
}

fn default_log_file_name() -> String {
    "app.log".to_string()
}

impl LoggingConfig {
    /// The log directory, if file output is enabled.
    pub fn log_dir(&self) -> Option<&Path> {
        self.directory
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            data: DataConfig {
                path: PathBuf::from(roster_core::loader::DEFAULT_CSV_PATH),
                load_on_startup: default_load_on_startup(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                file_name: default_log_file_name(),
            },
        }
    }
}

impl Settings {
    /// Loads configuration from all available sources.
    pub fn new(cli: CliArgs) -> Result<Self, ConfigError> {
        Self::with_environment(cli, environment())
    }

    /// Same as [`Settings::new`] with an explicit environment source.
    fn with_environment(cli: CliArgs, env: config::Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load default configuration
        builder = builder.add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));

        // Load system configuration if it exists
        if let Ok(metadata) = std::fs::metadata(DEFAULT_CONFIG_PATH) {
            if metadata.is_file() {
                builder = builder.add_source(config::File::from(PathBuf::from(DEFAULT_CONFIG_PATH)));
            }
        }

        // Load user configuration if specified
        if let Some(ref config_path) = cli.config {
            builder = builder.add_source(config::File::from(config_path.clone()));
        }

        builder = builder.add_source(env);

        // Override with command line arguments
        if let Some(ref host) = cli.host {
            builder = builder.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(ref path) = cli.data_path {
            builder = builder.set_override("data.path", path.to_string_lossy().as_ref())?;
        }
        if cli.skip_initial_load {
            builder = builder.set_override("data.load_on_startup", false)?;
        }
        if let Some(ref level) = cli.log_level {
            builder = builder.set_override("logging.level", level.as_str())?;
        }
        if let Some(ref dir) = cli.log_dir {
            builder = builder.set_override("logging.directory", dir.to_string_lossy().as_ref())?;
        }

        builder.build()?.try_deserialize()
    }
}

/// `COLLABORATORS_` variables, `__` between nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix("COLLABORATORS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
