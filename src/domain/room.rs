//! Room membership and message delivery.
//!
//! A [`Room`] owns the live sessions registered in it. Delivery is
//! best-effort: a recipient whose channel is closed is dropped from the
//! membership as part of the delivery pass, so the room heals itself without
//! a separate reaper.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::mpsc;
use uuid::Uuid;

/// Opaque identifier for one live connection. Two connections from the same
/// participant get distinct session ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Send side of one registered connection, owned by the room.
pub struct SessionHandle {
    pub participant_id: i64,
    pub sender: mpsc::UnboundedSender<String>,
}

/// Handle returned to the connection task by `connect`. Carries everything
/// `disconnect` needs; holds no ownership of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub room_id: String,
    pub participant_id: i64,
}

/// Outcome of one delivery pass over a room.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Sessions the text was handed to.
    pub delivered: usize,
    /// Participant ids of sessions dropped because their channel was closed.
    pub dropped: Vec<i64>,
}

/// A named broadcast group: the set of sessions that receive each other's
/// messages.
#[derive(Default)]
pub struct Room {
    sessions: HashMap<SessionId, SessionHandle>,
}

impl Room {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: SessionId, handle: SessionHandle) {
        self.sessions.insert(id, handle);
    }

    /// Remove a session. Returns whether it was present, so callers can keep
    /// removal idempotent.
    pub fn remove(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Participant ids of all live sessions, sorted for stable output.
    pub fn participant_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.sessions.values().map(|h| h.participant_id).collect();
        ids.sort_unstable();
        ids
    }

    /// Deliver `text` to every session currently in the room, except
    /// `exclude` if given.
    ///
    /// A failed send means the receiving task is gone; that session is
    /// removed in the same pass and reported in the result. Failures never
    /// abort delivery to the remaining recipients.
    pub fn deliver(&mut self, text: &str, exclude: Option<SessionId>) -> DeliveryReport {
        let mut report = DeliveryReport::default();
        self.sessions.retain(|id, handle| {
            if Some(*id) == exclude {
                return true;
            }
            match handle.sender.send(text.to_string()) {
                Ok(()) => {
                    report.delivered += 1;
                    true
                }
                Err(_) => {
                    report.dropped.push(handle.participant_id);
                    false
                }
            }
        });
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(participant_id: i64) -> (SessionHandle, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            SessionHandle {
                participant_id,
                sender: tx,
            },
            rx,
        )
    }

    #[test]
    fn test_insert_and_remove_membership() {
        // given (precondition):
        let mut room = Room::new();
        let id = SessionId::new();
        let (h, _rx) = handle(1);

        // when (operation):
        room.insert(id, h);

        // then (expected result):
        assert_eq!(room.len(), 1);
        assert!(room.contains(id));
        assert!(room.remove(id));
        assert!(room.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        // given (precondition):
        let mut room = Room::new();
        let id = SessionId::new();
        let (h, _rx) = handle(1);
        room.insert(id, h);

        // when (operation): remove twice
        let first = room.remove(id);
        let second = room.remove(id);

        // then (expected result): second removal is a no-op
        assert!(first);
        assert!(!second);
        assert!(room.is_empty());
    }

    #[test]
    fn test_deliver_reaches_all_sessions() {
        // given (precondition):
        let mut room = Room::new();
        let (ha, mut rx_a) = handle(1);
        let (hb, mut rx_b) = handle(2);
        room.insert(SessionId::new(), ha);
        room.insert(SessionId::new(), hb);

        // when (operation):
        let report = room.deliver("hello", None);

        // then (expected result):
        assert_eq!(report.delivered, 2);
        assert!(report.dropped.is_empty());
        assert_eq!(rx_a.try_recv().unwrap(), "hello");
        assert_eq!(rx_b.try_recv().unwrap(), "hello");
    }

    #[test]
    fn test_deliver_skips_excluded_session() {
        // given (precondition):
        let mut room = Room::new();
        let sender_id = SessionId::new();
        let (hs, mut rx_sender) = handle(1);
        let (hp, mut rx_peer) = handle(2);
        room.insert(sender_id, hs);
        room.insert(SessionId::new(), hp);

        // when (operation):
        let report = room.deliver("from 1", Some(sender_id));

        // then (expected result): sender keeps its membership but gets nothing
        assert_eq!(report.delivered, 1);
        assert_eq!(rx_peer.try_recv().unwrap(), "from 1");
        assert!(rx_sender.try_recv().is_err());
        assert!(room.contains(sender_id));
    }

    #[test]
    fn test_deliver_drops_dead_session_and_continues() {
        // given (precondition): B's receiver is dropped, simulating a dead peer
        let mut room = Room::new();
        let (ha, mut rx_a) = handle(1);
        let (hb, rx_b) = handle(2);
        let (hc, mut rx_c) = handle(3);
        room.insert(SessionId::new(), ha);
        let b_id = SessionId::new();
        room.insert(b_id, hb);
        room.insert(SessionId::new(), hc);
        drop(rx_b);

        // when (operation):
        let report = room.deliver("T", None);

        // then (expected result): A and C still get the message, B is gone
        assert_eq!(report.delivered, 2);
        assert_eq!(report.dropped, vec![2]);
        assert_eq!(rx_a.try_recv().unwrap(), "T");
        assert_eq!(rx_c.try_recv().unwrap(), "T");
        assert!(!room.contains(b_id));
        assert_eq!(room.len(), 2);
    }

    #[test]
    fn test_participant_ids_sorted() {
        // given (precondition):
        let mut room = Room::new();
        for pid in [7, 3, 5] {
            let (h, rx) = handle(pid);
            std::mem::forget(rx);
            room.insert(SessionId::new(), h);
        }

        // when (operation):
        let ids = room.participant_ids();

        // then (expected result):
        assert_eq!(ids, vec![3, 5, 7]);
    }
}
