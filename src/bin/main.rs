//! Collaborators API server binary.
//!
//! # Configuration
//!
//! Sources, in order of precedence:
//!
//! 1. Command-line arguments (highest precedence)
//! 2. Environment variables (prefixed with `COLLABORATORS_`)
//! 3. User-specified configuration file (via `--config`)
//! 4. System-wide configuration (`/etc/collaborators/config.toml`)
//! 5. Default configuration (embedded in binary)
//!
//! ```text
//! Options:
//!   -c, --config <FILE>       Path to configuration file
//!       --host <HOST>         Server host address [env: COLLABORATORS_SERVER_HOST]
//!       --port <PORT>         Server port [env: COLLABORATORS_SERVER_PORT]
//!       --data-path <FILE>    Users CSV file [env: COLLABORATORS_DATA_PATH]
//!       --skip-initial-load   Start with an empty roster
//!       --log-level <LEVEL>   Log filter [env: COLLABORATORS_LOG_LEVEL]
//!       --log-dir <DIR>       Rolling log file directory [env: COLLABORATORS_LOG_DIR]
//! ```
//!
//! ## Configuration File Format (TOML)
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//!
//! [data]
//! path = "data/users.csv"
//! load_on_startup = true
//!
//! [logging]
//! level = "info"
//! directory = "logs"
//! file_name = "app.log"
//! ```

use clap::Parser;
use collaborators::{logging, Application, CliArgs, Settings};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli_args = CliArgs::parse();

    // Load settings from config file and CLI args
    let settings = Settings::new(cli_args)?;

    // Held until exit so buffered file logs are flushed
    let _log_guard = logging::init_tracing(&settings.logging)?;

    let application = Application::build(&settings).await?;
    application.run_until_stopped().await?;

    Ok(())
}
