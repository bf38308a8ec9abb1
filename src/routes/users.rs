use crate::directory::UserDirectory;
use crate::envelope::Envelope;
use crate::routes::{ApiError, TeamQuery, NO_USERS_DATA};
use actix_web::http::StatusCode;
use actix_web::web::{Data, Query};
use actix_web::{get, route, HttpResponse};
use roster_core::filter_by_team;
use tracing::{info, warn};

/// Lists users, optionally restricted to one team.
#[get("/users")]
pub async fn read_users(
    directory: Data<dyn UserDirectory>,
    query: Query<TeamQuery>,
) -> HttpResponse {
    let snapshot = directory.users().await;
    if snapshot.is_empty() {
        warn!("get_users: no users data available");
        return Envelope::message(StatusCode::UNPROCESSABLE_ENTITY, NO_USERS_DATA).into_response();
    }

    let team = query.team.as_deref();
    let users = filter_by_team(snapshot.users(), team);
    info!(?team, count = users.len(), "get_users: success");
    Envelope::ok(users, "Getting Users Data").into_response()
}

/// Reloads the roster from its CSV source.
#[route("/users/refresh", method = "GET", method = "POST")]
pub async fn refresh_users(directory: Data<dyn UserDirectory>) -> Result<HttpResponse, ApiError> {
    info!("refreshing users data");
    let summary = directory.refresh().await?;
    info!(
        users = summary.loaded_users,
        skipped = summary.skipped_rows,
        generation = summary.generation,
        "refresh_users: success"
    );
    Ok(Envelope::ok(summary, "Refreshing Users Data").into_response())
}
