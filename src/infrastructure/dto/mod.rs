//! Wire DTOs for the HTTP API.
//!
//! WebSocket frames are plain UTF-8 text with no envelope, so only the HTTP
//! surface needs serde types.

pub mod http;
