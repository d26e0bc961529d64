//! Room-based message broker.
//!
//! The broker owns the process-wide registry mapping room ids to live
//! sessions and is its sole mutator. Every read-modify-write on the registry
//! (connect, disconnect, the snapshot-send-cleanup pass of a broadcast) runs
//! under one `tokio::sync::Mutex`, so concurrent connects to the same new
//! room cannot create duplicate rooms and a disconnect cannot race a
//! broadcast's cleanup.
//!
//! Delivery hands messages to each session's unbounded channel; the actual
//! socket write happens in that connection's own pusher task. Sends therefore
//! never block the registry lock, and the only per-recipient failure is a
//! closed channel, which removes that session on the spot.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tokio::sync::mpsc;

use crate::domain::{Room, Session, SessionHandle, SessionId};

/// Summary of one live room, for the debug listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub room_id: String,
    pub participant_ids: Vec<i64>,
}

/// The process-wide registry of rooms and their sessions.
///
/// Created once at startup and injected into the connection handlers; there
/// is no implicit global.
#[derive(Default)]
pub struct RoomBroker {
    rooms: Mutex<HashMap<String, Room>>,
}

impl RoomBroker {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    /// Register a connection in `room_id`, creating the room if absent.
    ///
    /// Returns the session handle the connection task uses for subsequent
    /// broadcasts and for deregistration.
    pub async fn connect(
        &self,
        room_id: &str,
        participant_id: i64,
        sender: mpsc::UnboundedSender<String>,
    ) -> Session {
        let session_id = SessionId::new();
        let mut rooms = self.rooms.lock().await;
        let room = rooms.entry(room_id.to_string()).or_insert_with(Room::new);
        room.insert(
            session_id,
            SessionHandle {
                participant_id,
                sender,
            },
        );
        tracing::info!(
            "Session {} registered: participant {} in room '{}' ({} member(s))",
            session_id,
            participant_id,
            room_id,
            room.len()
        );
        Session {
            id: session_id,
            room_id: room_id.to_string(),
            participant_id,
        }
    }

    /// Remove a session from its room. Idempotent; safe to call concurrently
    /// with an in-flight broadcast on the same room. Drops the room entry
    /// once it holds no sessions.
    pub async fn disconnect(&self, session: &Session) {
        let mut rooms = self.rooms.lock().await;
        let Some(room) = rooms.get_mut(&session.room_id) else {
            return;
        };
        if room.remove(session.id) {
            tracing::info!(
                "Session {} deregistered: participant {} left room '{}'",
                session.id,
                session.participant_id,
                session.room_id
            );
        }
        if room.is_empty() {
            rooms.remove(&session.room_id);
            tracing::debug!("Room '{}' emptied and pruned", session.room_id);
        }
    }

    /// Deliver `text` to every session currently registered in `room_id`.
    ///
    /// A room with no registered sessions is a silent no-op: it may have just
    /// emptied. Returns the number of sessions the text was handed to.
    pub async fn broadcast(&self, room_id: &str, text: &str) -> usize {
        self.deliver(room_id, text, None).await
    }

    /// Like [`broadcast`](Self::broadcast), but skips the originating
    /// session. Used for join/leave notices and chat frames, which peers
    /// receive but the origin does not.
    pub async fn broadcast_except(&self, room_id: &str, exclude: SessionId, text: &str) -> usize {
        self.deliver(room_id, text, Some(exclude)).await
    }

    async fn deliver(&self, room_id: &str, text: &str, exclude: Option<SessionId>) -> usize {
        let mut rooms = self.rooms.lock().await;
        let Some(room) = rooms.get_mut(room_id) else {
            return 0;
        };
        let report = room.deliver(text, exclude);
        for participant_id in &report.dropped {
            tracing::warn!(
                "Dropped dead session of participant {} from room '{}' during broadcast",
                participant_id,
                room_id
            );
        }
        if room.is_empty() {
            rooms.remove(room_id);
            tracing::debug!("Room '{}' emptied and pruned", room_id);
        }
        report.delivered
    }

    /// Number of sessions currently registered in `room_id`.
    pub async fn member_count(&self, room_id: &str) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).map(Room::len).unwrap_or(0)
    }

    /// Participant ids of the sessions in `room_id`, sorted.
    pub async fn participants(&self, room_id: &str) -> Vec<i64> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .map(Room::participant_ids)
            .unwrap_or_default()
    }

    /// Snapshot of all live rooms, sorted by room id.
    pub async fn room_summaries(&self) -> Vec<RoomSummary> {
        let rooms = self.rooms.lock().await;
        let mut summaries: Vec<RoomSummary> = rooms
            .iter()
            .map(|(room_id, room)| RoomSummary {
                room_id: room_id.clone(),
                participant_ids: room.participant_ids(),
            })
            .collect();
        summaries.sort_by(|a, b| a.room_id.cmp(&b.room_id));
        summaries
    }
}
