//! User/mood store contract.
//!
//! The domain layer defines the data-access interface it needs; concrete
//! implementations live in the infrastructure layer (dependency inversion).

use async_trait::async_trait;

use super::{MoodRecord, StoreError, UserProfile};

/// Persistence for users and their mood reports.
///
/// "Latest" always means the most recently recorded report, ties broken by
/// insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Register a user. Registering an already-taken username returns the
    /// existing profile unchanged.
    async fn register_user(
        &self,
        username: &str,
        gender: &str,
        location: &str,
    ) -> Result<UserProfile, StoreError>;

    /// Look up a user by id.
    async fn user(&self, user_id: i64) -> Option<UserProfile>;

    /// Append a mood report for a user.
    async fn record_mood(&self, user_id: i64, mood: &str) -> Result<MoodRecord, StoreError>;

    /// The latest reported mood of a user, if they have reported any.
    async fn latest_mood(&self, user_id: i64) -> Option<String>;

    /// Find another user whose latest matching report equals `mood`,
    /// excluding `user_id`. Returns the matched user id and the shared mood.
    async fn find_user_with_mood(&self, mood: &str, excluding: i64) -> Option<(i64, String)>;
}
