use crate::model::User;
use chrono::{DateTime, Utc};

/// Users from one successful load.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    users: Vec<User>,
    skipped: usize,
    generation: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub(super) fn new(
        users: Vec<User>,
        skipped: usize,
        generation: u64,
        loaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            users,
            skipped,
            generation,
            loaded_at: Some(loaded_at),
        }
    }

    /// Builds a detached snapshot, generation 0.
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// Users in file order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Rows rejected during the load that produced this snapshot.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// 0 until the first successful refresh, then incremented on every swap.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}
