use crate::directory::UserDirectory;
use crate::envelope::Envelope;
use crate::routes::NO_USERS_DATA;
use actix_web::http::StatusCode;
use actix_web::web::{Data, Query};
use actix_web::{get, HttpResponse};
use roster_core::aggregation::{summarize, OLDEST_USERS_LIMIT};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub team: Option<String>,
    /// How many of the oldest users to list
    pub top: Option<usize>,
}

/// Aggregated roster statistics, optionally for one team.
#[get("/stats")]
pub async fn get_stats(
    directory: Data<dyn UserDirectory>,
    query: Query<StatsQuery>,
) -> HttpResponse {
    let snapshot = directory.users().await;
    if snapshot.is_empty() {
        warn!("get_stats: no users data available");
        return Envelope::format(
            Some(json!({ "totalUsers": snapshot.len() })),
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(NO_USERS_DATA),
        )
        .into_response();
    }

    let team = query.team.as_deref();
    let stats = summarize(snapshot.users(), team, query.top.unwrap_or(OLDEST_USERS_LIMIT));
    info!(
        ?team,
        counted = stats.counted_users,
        average_age = stats.average_age_of_users,
        "get_stats: success"
    );
    Envelope::format(Some(stats), StatusCode::OK, None).into_response()
}
