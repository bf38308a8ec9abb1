//! Standard JSON response body: `{ "status", "message", "data"?, "errors"? }`.
//!
//! The `status` field always mirrors the HTTP status code of the response.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Serialize, Serializer};

const DEFAULT_MESSAGE: &str = "success";

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T = ()> {
    #[serde(serialize_with = "status_as_u16")]
    pub status: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Builds an envelope; `message` falls back to `"success"`.
    pub fn format(data: Option<T>, status: StatusCode, message: Option<&str>) -> Self {
        Self {
            status,
            message: message.unwrap_or(DEFAULT_MESSAGE).to_string(),
            data,
            errors: Vec::new(),
        }
    }

    /// 200 response carrying `data`.
    pub fn ok(data: T, message: &str) -> Self {
        Self::format(Some(data), StatusCode::OK, Some(message))
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self)
    }
}

impl Envelope {
    /// Envelope without a payload.
    pub fn message(status: StatusCode, message: &str) -> Self {
        Self::format(None, status, Some(message))
    }
}

/// Serializes any value to a JSON string.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

fn status_as_u16<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
