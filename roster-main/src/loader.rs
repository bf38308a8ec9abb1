//! CSV loader turning the roster file into validated [`User`] values.
//!
//! The loader is strict about the file shape and lenient about its content:
//! - The header row must be exactly [`USER_CSV_FIELDS`], otherwise the whole
//!   load fails with [`LoadError::Schema`] before any row is looked at.
//! - Each data row that fails a presence, type or model constraint is skipped,
//!   reported in [`LoadReport::skipped`] and logged at warning level.
//!
//! Data rows are numbered from 1, the header excluded.

use crate::model::{User, UserError};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Expected header, in order.
pub const USER_CSV_FIELDS: [&str; 5] = ["name", "email", "age", "team", "start_date"];

/// Location used when no data path is configured.
pub const DEFAULT_CSV_PATH: &str = "data/users.csv";

/// File-level failure. Aborts the load; nothing is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("users data file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read users data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid CSV header: expected {expected:?}, got {found:?}")]
    Schema {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("users loader task did not complete: {0}")]
    Task(String),
}

/// Why a single row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("invalid age '{value}': {source}")]
    InvalidAge {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("row is not valid UTF-8")]
    Encoding,

    #[error(transparent)]
    Invalid(#[from] UserError),
}

/// A data row left out of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row number.
    pub line: usize,
    pub raw: Vec<String>,
    pub reason: RowError,
}

/// Outcome of a successful load.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    /// Valid users in file order.
    pub users: Vec<User>,
    pub skipped: Vec<SkippedRow>,
}

/// Stateless CSV reader for the roster file.
pub struct UserLoader;

impl UserLoader {
    /// Loads users from the CSV file at `path`.
    ///
    /// # Errors
    /// - [`LoadError::NotFound`] when the file does not exist.
    /// - [`LoadError::Io`] when it cannot be opened or read.
    /// - [`LoadError::Schema`] when the header differs from [`USER_CSV_FIELDS`].
    pub fn load_users_from_file(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Self::load_users_from_reader(file)
    }

    /// Loads users from any CSV byte source.
    pub fn load_users_from_reader<R: Read>(reader: R) -> Result<LoadReport, LoadError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        Self::check_header(reader.headers()?)?;

        let mut report = LoadReport::default();
        for (index, record) in reader.byte_records().enumerate() {
            let line = index + 1;
            let outcome = match StringRecord::from_byte_record(record?) {
                Ok(record) => Self::parse_user_row(&record)
                    .map_err(|reason| (record.iter().map(str::to_string).collect(), reason)),
                Err(err) => {
                    let raw = err
                        .into_byte_record()
                        .iter()
                        .map(|field| String::from_utf8_lossy(field).into_owned())
                        .collect();
                    Err((raw, RowError::Encoding))
                }
            };

            match outcome {
                Ok(user) => {
                    info!(line, name = %user.name(), "new user added");
                    report.users.push(user);
                }
                Err((raw, reason)) => {
                    warn!(line, row = ?raw, reason = %reason, "skipping invalid user row");
                    report.skipped.push(SkippedRow { line, raw, reason });
                }
            }
        }

        info!(
            valid = report.users.len(),
            skipped = report.skipped.len(),
            "users data loaded"
        );
        Ok(report)
    }

    fn check_header(headers: &StringRecord) -> Result<(), LoadError> {
        if headers.iter().eq(USER_CSV_FIELDS.iter().copied()) {
            return Ok(());
        }
        Err(LoadError::Schema {
            expected: USER_CSV_FIELDS.iter().map(|f| f.to_string()).collect(),
            found: headers.iter().map(str::to_string).collect(),
        })
    }

    fn parse_user_row(record: &StringRecord) -> Result<User, RowError> {
        let mut fields = [""; USER_CSV_FIELDS.len()];
        for (slot, (index, field)) in fields.iter_mut().zip(USER_CSV_FIELDS.iter().enumerate()) {
            let value = record.get(index).map(str::trim).unwrap_or_default();
            if value.is_empty() {
                return Err(RowError::MissingField(*field));
            }
            *slot = value;
        }
        let [name, email, age, team, start_date] = fields;

        let age = age.parse::<i64>().map_err(|source| RowError::InvalidAge {
            value: age.to_string(),
            source,
        })?;

        Ok(User::new(name, email, age, team, start_date)?)
    }
}
