//! In-memory user/mood store.
//!
//! Users and mood reports are append-only vectors behind one mutex; a row's
//! position determines its id, so "latest" queries scan from the back. Good
//! enough for a single-process deployment; a database-backed implementation
//! would slot in behind the same trait.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::time::unix_timestamp_ms;
use crate::domain::{MoodRecord, MoodStore, StoreError, UserProfile};

#[derive(Default)]
struct Tables {
    users: Vec<UserProfile>,
    moods: Vec<MoodRecord>,
}

/// In-memory [`MoodStore`] implementation.
#[derive(Default)]
pub struct InMemoryMoodStore {
    tables: Mutex<Tables>,
}

impl InMemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodStore for InMemoryMoodStore {
    async fn register_user(
        &self,
        username: &str,
        gender: &str,
        location: &str,
    ) -> Result<UserProfile, StoreError> {
        let mut tables = self.tables.lock().await;
        if let Some(existing) = tables.users.iter().find(|u| u.username == username) {
            return Ok(existing.clone());
        }
        let user = UserProfile {
            id: tables.users.len() as i64 + 1,
            username: username.to_string(),
            gender: gender.to_string(),
            location: location.to_string(),
            created_at: unix_timestamp_ms(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn user(&self, user_id: i64) -> Option<UserProfile> {
        let tables = self.tables.lock().await;
        tables.users.iter().find(|u| u.id == user_id).cloned()
    }

    async fn record_mood(&self, user_id: i64, mood: &str) -> Result<MoodRecord, StoreError> {
        let mut tables = self.tables.lock().await;
        let record = MoodRecord {
            id: tables.moods.len() as i64 + 1,
            user_id,
            mood: mood.to_string(),
            created_at: unix_timestamp_ms(),
        };
        tables.moods.push(record.clone());
        Ok(record)
    }

    async fn latest_mood(&self, user_id: i64) -> Option<String> {
        let tables = self.tables.lock().await;
        tables
            .moods
            .iter()
            .rev()
            .find(|m| m.user_id == user_id)
            .map(|m| m.mood.clone())
    }

    async fn find_user_with_mood(&self, mood: &str, excluding: i64) -> Option<(i64, String)> {
        let tables = self.tables.lock().await;
        tables
            .moods
            .iter()
            .rev()
            .find(|m| m.mood == mood && m.user_id != excluding)
            .map(|m| (m.user_id, m.mood.clone()))
    }
}
