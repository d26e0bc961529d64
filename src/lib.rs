//! Mood-based matchmaking and chat service.
//!
//! Users report a mood, get paired with another user currently reporting the
//! same mood, and chat in a shared room over WebSocket. The room broker that
//! tracks connected sessions and fans messages out lives in [`broker`];
//! mood storage, matching and reply generation are collaborators behind the
//! traits in [`domain`].

// layers
pub mod broker;
pub mod domain;
pub mod infrastructure;
pub mod ui;

// shared library
pub mod common;
