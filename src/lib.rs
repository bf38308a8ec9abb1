//! Collaborators API: HTTP access to a CSV-loaded team roster.
//!
//! This library wires the [`roster_core`] loader, snapshot store and
//! aggregation functions behind an actix-web server exposing read, filter,
//! refresh, statistics and health endpoints.
//!
//! # Example
//!
//! ```rust,no_run
//! use collaborators::{Application, CliArgs, Settings};
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::new(CliArgs::default())?;
//!     let application = Application::build(&settings).await?;
//!     application.run_until_stopped().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod directory;
pub mod envelope;
pub mod logging;
pub mod roster_service;
pub mod routes;
pub mod startup;

#[cfg(test)]
mod tests;

pub use config::{CliArgs, Settings};
pub use directory::{RefreshSummary, UserDirectory};
pub use envelope::Envelope;
pub use roster_service::RosterServiceImpl;
pub use startup::Application;
