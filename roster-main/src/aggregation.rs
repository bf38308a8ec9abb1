//! Aggregations over a roster snapshot.
//!
//! Every function here borrows its input and never mutates it. Derived
//! sequences are new vectors of references into the same user values, so a
//! filter or ranking never copies records.
//!
//! Inputs are taken as `&[U]` where `U: Borrow<User>`, which lets the same
//! function run over a snapshot (`&[User]`) or over the output of another
//! aggregation (`&[&User]`).

use crate::model::User;
use serde::Serialize;
use std::borrow::Borrow;

/// Default number of users listed in [`UserStats::oldest_users`].
pub const OLDEST_USERS_LIMIT: usize = 3;

/// Keeps the users whose team equals `team` exactly, in input order.
///
/// With `team == None` every user is kept.
pub fn filter_by_team<'a, U: Borrow<User>>(users: &'a [U], team: Option<&str>) -> Vec<&'a User> {
    users
        .iter()
        .map(Borrow::<User>::borrow)
        .filter(|user| team.map_or(true, |team| user.team() == team))
        .collect()
}

/// Mean age rounded to one decimal place, `0.0` for an empty input.
///
/// Exact halves round to the even digit (`30.25` gives `30.2`).
pub fn average_age<U: Borrow<User>>(users: &[U]) -> f64 {
    if users.is_empty() {
        return 0.0;
    }
    let total: u64 = users.iter().map(|u| u64::from(Borrow::<User>::borrow(u).age())).sum();
    let mean = total as f64 / users.len() as f64;
    format!("{mean:.1}").parse().unwrap_or(mean)
}

/// The `n` oldest users, oldest first.
///
/// Users sharing an age keep their input order. Asking for more users than
/// exist returns all of them, sorted.
pub fn top_n_oldest<'a, U: Borrow<User>>(users: &'a [U], n: usize) -> Vec<&'a User> {
    if n == 0 {
        return Vec::new();
    }
    rank_oldest(users.iter().map(Borrow::<User>::borrow).collect(), n)
}

fn rank_oldest(mut ranked: Vec<&User>, n: usize) -> Vec<&User> {
    // stable: ties stay in input order
    ranked.sort_by(|a, b| b.age().cmp(&a.age()));
    ranked.truncate(n);
    ranked
}

/// Roster statistics, optionally narrowed to one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats<'a> {
    /// Size of the whole snapshot, regardless of the team filter.
    pub total_users: usize,
    pub counted_users: usize,
    pub average_age_of_users: f64,
    pub oldest_users: Vec<&'a User>,
}

/// Computes [`UserStats`] for `team` (or everyone) over a snapshot, listing
/// up to `oldest` of the oldest counted users.
pub fn summarize<'a>(users: &'a [User], team: Option<&str>, oldest: usize) -> UserStats<'a> {
    let counted = filter_by_team(users, team);
    UserStats {
        total_users: users.len(),
        counted_users: counted.len(),
        average_age_of_users: average_age(&counted),
        oldest_users: rank_oldest(counted, oldest),
    }
}
