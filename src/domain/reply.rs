//! Reply-generation contract.

use async_trait::async_trait;

/// Produces an empathetic text reply to a chat message, given the sender's
/// mood. Not stateful; upstream failures are folded into the reply text so
/// the chat flow never breaks on a bad upstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generate a reply for a user feeling `mood` who said `message`.
    async fn generate_reply(&self, mood: &str, message: &str) -> String;

    /// Liveness probe of the upstream service: `(healthy, message)`, where
    /// the message carries a truncated excerpt of the probe response or the
    /// error text. Synchronous single attempt, no retry.
    async fn check_health(&self) -> (bool, String);
}
