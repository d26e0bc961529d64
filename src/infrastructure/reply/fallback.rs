//! Static fallback replies, used when no Gemini API key is configured.

use async_trait::async_trait;

use crate::domain::ReplyGenerator;

use super::GEMINI_API_KEY_ENV;

/// Canned empathetic openers per mood. Lookup is case-insensitive.
const TEMPLATES: &[(&str, &str)] = &[
    (
        "anger",
        "I can feel that fire. Want to vent more, or try a quick cool-down?",
    ),
    (
        "depression",
        "You're not alone. Small steps count, and I'm here to listen.",
    ),
    ("sad", "That sounds heavy. Want to talk it through together?"),
    ("happy", "Love that energy! What made your day?"),
    (
        "tired",
        "Rest matters. A tiny recharge break might help. How are you holding up?",
    ),
];

const DEFAULT_PREFIX: &str = "I'm here for you.";

/// [`ReplyGenerator`] that never calls out; always reports unhealthy since
/// its existence means the upstream is unconfigured.
#[derive(Default)]
pub struct FallbackReplyGenerator;

impl FallbackReplyGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReplyGenerator for FallbackReplyGenerator {
    async fn generate_reply(&self, mood: &str, message: &str) -> String {
        let lowered = mood.to_lowercase();
        let prefix = TEMPLATES
            .iter()
            .find(|(m, _)| *m == lowered)
            .map(|(_, t)| *t)
            .unwrap_or(DEFAULT_PREFIX);
        format!("(AI - {mood}) {prefix} You said: '{message}'")
    }

    async fn check_health(&self) -> (bool, String) {
        (
            false,
            format!("{GEMINI_API_KEY_ENV} is missing in environment."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_mood_uses_its_template() {
        // given (precondition):
        let replies = FallbackReplyGenerator::new();

        // when (operation):
        let reply = replies.generate_reply("sad", "rough week").await;

        // then (expected result):
        assert_eq!(
            reply,
            "(AI - sad) That sounds heavy. Want to talk it through together? You said: 'rough week'"
        );
    }

    #[tokio::test]
    async fn test_mood_lookup_is_case_insensitive() {
        // given (precondition):
        let replies = FallbackReplyGenerator::new();

        // when (operation):
        let reply = replies.generate_reply("Happy", "got the job").await;

        // then (expected result): template matched, original casing kept in prefix
        assert_eq!(
            reply,
            "(AI - Happy) Love that energy! What made your day? You said: 'got the job'"
        );
    }

    #[tokio::test]
    async fn test_unknown_mood_falls_back_to_default() {
        // given (precondition):
        let replies = FallbackReplyGenerator::new();

        // when (operation):
        let reply = replies.generate_reply("bewildered", "huh").await;

        // then (expected result):
        assert_eq!(
            reply,
            "(AI - bewildered) I'm here for you. You said: 'huh'"
        );
    }

    #[tokio::test]
    async fn test_health_check_reports_missing_key() {
        // given (precondition):
        let replies = FallbackReplyGenerator::new();

        // when (operation):
        let (healthy, message) = replies.check_health().await;

        // then (expected result):
        assert!(!healthy);
        assert_eq!(message, "GEMINI_API_KEY is missing in environment.");
    }
}
