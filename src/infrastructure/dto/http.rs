//! Request/response shapes for the HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::{MoodRecord, UserProfile};

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub gender: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub gender: String,
    pub location: String,
}

impl From<UserProfile> for UserDto {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            username: user.username,
            gender: user.gender,
            location: user.location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub user_id: i64,
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct MoodDto {
    pub id: i64,
    pub user_id: i64,
    pub mood: String,
}

impl From<MoodRecord> for MoodDto {
    fn from(record: MoodRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            mood: record.mood,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    /// `None` when the user has no mood on record or nobody shares it.
    pub r#match: Option<MatchDto>,
}

#[derive(Debug, Serialize)]
pub struct MatchDto {
    pub user_id: i64,
    pub username: String,
    pub shared_mood: String,
    pub room_id: String,
}

fn default_mood() -> String {
    "neutral".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TalkRequest {
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TalkResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct AiStatusResponse {
    pub gemini_api: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RoomSummaryDto {
    pub room_id: String,
    pub participants: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talk_request_defaults() {
        // given (precondition): an empty payload
        let payload = "{}";

        // when (operation):
        let req: TalkRequest = serde_json::from_str(payload).unwrap();

        // then (expected result):
        assert_eq!(req.mood, "neutral");
        assert_eq!(req.message, "");
    }

    #[test]
    fn test_match_response_serializes_match_key() {
        // given (precondition):
        let response = MatchResponse { r#match: None };

        // when (operation):
        let json = serde_json::to_string(&response).unwrap();

        // then (expected result): raw-identifier field comes out as "match"
        assert_eq!(json, r#"{"match":null}"#);
    }
}
