//! Shared application state.

use std::sync::Arc;

use crate::broker::RoomBroker;
use crate::domain::{MoodStore, ReplyGenerator};

/// Everything the handlers need, injected at startup.
pub struct AppState {
    /// Room registry and fan-out. Sole owner of connection state.
    pub broker: Arc<RoomBroker>,
    /// User and mood persistence.
    pub store: Arc<dyn MoodStore>,
    /// Reply-generation collaborator.
    pub replies: Arc<dyn ReplyGenerator>,
}
