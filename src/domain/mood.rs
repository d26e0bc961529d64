//! User and mood report records.

use serde::Serialize;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub gender: String,
    pub location: String,
    /// Unix timestamp in milliseconds.
    pub created_at: i64,
}

/// One mood report. Reports are append-only; the highest id for a user is
/// their latest mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodRecord {
    pub id: i64,
    pub user_id: i64,
    pub mood: String,
    /// Unix timestamp in milliseconds.
    pub created_at: i64,
}
