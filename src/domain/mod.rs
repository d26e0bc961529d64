//! Domain types and collaborator contracts.

pub mod error;
pub mod matching;
pub mod mood;
pub mod reply;
pub mod room;
pub mod store;

pub use error::{ReplyError, StoreError};
pub use matching::room_id_for;
pub use mood::{MoodRecord, UserProfile};
pub use reply::ReplyGenerator;
pub use room::{Room, Session, SessionHandle, SessionId};
pub use store::MoodStore;

/// Control frame signalling voluntary departure from a room.
///
/// Compared against inbound text after trimming surrounding whitespace;
/// everything else is an ordinary chat payload.
pub const LEAVE_SENTINEL: &str = "__leave__";
