/*!
# Roster: CSV-backed user snapshots with aggregation helpers

Roster loads a team roster from a CSV file into validated, immutable user
records, keeps the latest load in memory as a shared snapshot, and offers
pure aggregation functions over it.

## Components

### Loading
- Strict header check against `name,email,age,team,start_date`
- Per-row validation (presence, integer age, email syntax, non-negative age)
- Invalid rows are skipped, reported and logged, never fatal

### Storage
- One snapshot at a time, replaced wholesale on refresh
- Readers hold an `Arc` to a single generation; no mixed views
- A failed refresh leaves the previous snapshot untouched

### Aggregation
- Team filter, average age, top-N oldest
- Combined statistics as served by the HTTP API

## Usage

```rust,no_run
use roster_core::{aggregation, storage::UserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = UserStore::new("data/users.csv");
    store.refresh().await?;

    let snapshot = store.current().await;
    let backend = aggregation::filter_by_team(snapshot.users(), Some("Backend"));
    println!("backend average age: {}", aggregation::average_age(&backend));
    Ok(())
}
```
*/

pub mod aggregation;
pub mod loader;
pub mod model;
pub mod storage;

pub use aggregation::{average_age, filter_by_team, summarize, top_n_oldest, UserStats};
pub use loader::{LoadError, LoadReport, RowError, SkippedRow, UserLoader};
pub use model::{User, UserError};
pub use storage::{Snapshot, UserStore};
