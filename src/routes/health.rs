//! Liveness and readiness probes.

use crate::directory::{RefreshSummary, UserDirectory};
use crate::envelope::{self, Envelope};
use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{get, HttpResponse};
use serde_json::json;
use tracing::{error, info};

/// Answers as long as the process is up.
#[get("/health/live")]
pub async fn alive() -> HttpResponse {
    Envelope::message(StatusCode::OK, "alive").into_response()
}

/// Checks that the data source is reachable and responses can be encoded.
#[get("/health/ready")]
pub async fn ready(directory: Data<dyn UserDirectory>) -> HttpResponse {
    let mut errors = Vec::new();

    let source = directory.source();
    match tokio::fs::metadata(&source).await {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => errors.push(format!("users data source {} is not a file", source.display())),
        Err(e) => errors.push(format!("users data source {} unavailable: {e}", source.display())),
    }

    if let Err(e) = envelope::serialize(&Envelope::ok(json!({ "test": 123 }), "ready")) {
        errors.push(format!("response serialization error: {e}"));
    }

    if !errors.is_empty() {
        error!(?errors, "readiness check failed");
        return Envelope::message(StatusCode::SERVICE_UNAVAILABLE, "not ready")
            .with_errors(errors)
            .into_response();
    }

    let snapshot = directory.users().await;
    info!(users = snapshot.len(), "readiness: everything ok");
    Envelope::ok(RefreshSummary::from(snapshot.as_ref()), "ready").into_response()
}
