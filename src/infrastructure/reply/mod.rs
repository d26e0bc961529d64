//! Reply-generator implementations.

pub mod fallback;
pub mod gemini;

use std::sync::Arc;

pub use fallback::FallbackReplyGenerator;
pub use gemini::GeminiReplyGenerator;

use crate::domain::ReplyGenerator;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Pick a reply generator from the environment: Gemini when an API key is
/// set, the static fallback table otherwise.
pub fn reply_generator_from_env() -> Arc<dyn ReplyGenerator> {
    match std::env::var(GEMINI_API_KEY_ENV) {
        Ok(key) if !key.is_empty() => {
            tracing::info!("Reply generation backed by Gemini");
            Arc::new(GeminiReplyGenerator::new(key))
        }
        _ => {
            tracing::info!("{} not set, using fallback replies", GEMINI_API_KEY_ENV);
            Arc::new(FallbackReplyGenerator::new())
        }
    }
}
