//! HTTP handlers.
//!
//! Every handler answers with an [`Envelope`] whose `status` equals the HTTP
//! status code.

pub mod health;
pub mod stats;
pub mod users;

use crate::envelope::Envelope;
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, ResponseError};
use roster_core::LoadError;
use serde::Deserialize;
use thiserror::Error;

pub(crate) const NO_USERS_DATA: &str = "No Users Data Available";

/// Optional `?team=` filter shared by the read endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct TeamQuery {
    pub team: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl ApiError {
    pub fn to_message(&self) -> String {
        match self {
            // The header mismatch is about the data file shape and safe to show
            ApiError::Load(e @ LoadError::Schema { .. }) => e.to_string(),
            // Do not expose file system paths or I/O details
            ApiError::Load(_) => "failed to load users data".to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Load(LoadError::Schema { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        Envelope::message(self.status_code(), &self.to_message()).into_response()
    }
}

#[get("/")]
pub async fn hello_world() -> HttpResponse {
    Envelope::message(StatusCode::OK, "Hello World, you're using API Collaborators").into_response()
}

/// Registers every route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hello_world)
        .service(users::refresh_users)
        .service(users::read_users)
        .service(stats::get_stats)
        .service(health::alive)
        .service(health::ready);
}
