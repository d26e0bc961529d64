//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::domain::room_id_for;
use crate::infrastructure::dto::http::{
    AiStatusResponse, MatchDto, MatchRequest, MatchResponse, MoodDto, MoodRequest,
    RegisterUserRequest, RoomSummaryDto, TalkRequest, TalkResponse, UserDto,
};

use super::super::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Liveness probe of the reply-generation upstream.
pub async fn ai_status(State(state): State<Arc<AppState>>) -> Json<AiStatusResponse> {
    let (healthy, message) = state.replies.check_health().await;
    Json(AiStatusResponse {
        gemini_api: healthy,
        message,
    })
}

/// Register a user; an already-taken username returns the existing profile.
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<Json<UserDto>, StatusCode> {
    match state
        .store
        .register_user(&req.username, &req.gender, &req.location)
        .await
    {
        Ok(user) => Ok(Json(user.into())),
        Err(e) => {
            tracing::warn!("Failed to register user '{}': {}", req.username, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Record a mood report.
pub async fn set_mood(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MoodRequest>,
) -> Result<Json<MoodDto>, StatusCode> {
    match state.store.record_mood(req.user_id, &req.mood).await {
        Ok(record) => Ok(Json(record.into())),
        Err(e) => {
            tracing::warn!("Failed to record mood for user {}: {}", req.user_id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Find another user whose latest mood equals the asking user's latest mood.
///
/// Returns `{"match": null}` when the user has no mood on record or nobody
/// currently shares it.
pub async fn find_match(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MatchRequest>,
) -> Json<MatchResponse> {
    let Some(mood) = state.store.latest_mood(req.user_id).await else {
        return Json(MatchResponse { r#match: None });
    };

    let Some((other_id, shared_mood)) = state.store.find_user_with_mood(&mood, req.user_id).await
    else {
        return Json(MatchResponse { r#match: None });
    };

    let username = state
        .store
        .user(other_id)
        .await
        .map(|u| u.username)
        .unwrap_or_else(|| "unknown".to_string());

    Json(MatchResponse {
        r#match: Some(MatchDto {
            user_id: other_id,
            username,
            shared_mood,
            room_id: room_id_for(req.user_id, other_id),
        }),
    })
}

/// One-shot empathetic reply outside any room.
pub async fn ai_talk(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TalkRequest>,
) -> Json<TalkResponse> {
    let reply = state.replies.generate_reply(&req.mood, &req.message).await;
    Json(TalkResponse { reply })
}

/// Debug listing of live rooms and their participants.
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let summaries = state
        .broker
        .room_summaries()
        .await
        .into_iter()
        .map(|s| RoomSummaryDto {
            room_id: s.room_id,
            participants: s.participant_ids,
        })
        .collect();
    Json(summaries)
}
