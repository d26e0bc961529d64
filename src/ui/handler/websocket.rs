//! WebSocket connection handlers.
//!
//! One connection drives one session through `JOINED → LEAVING → CLOSED`:
//! register in the room, notify peers, relay frames until the leave sentinel
//! or the transport drops, broadcast the matching farewell, then deregister
//! unconditionally.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::LEAVE_SENTINEL;

use super::super::state::AppState;

/// How a session ended, deciding which farewell its peers see.
enum Departure {
    /// The client sent the leave sentinel.
    Voluntary,
    /// The transport closed or errored without a sentinel.
    Abrupt,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path((room_id, participant_id)): Path<(String, i64)>,
) -> impl IntoResponse {
    // A failed handshake never reaches handle_socket; axum rejects the
    // upgrade and the session is never registered.
    ws.on_upgrade(move |socket| handle_socket(socket, state, room_id, participant_id))
}

/// Spawns a task that forwards messages from the rx channel into the
/// WebSocket sink. Exits when the channel closes or the peer stops reading.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    room_id: String,
    participant_id: i64,
) {
    let (sender, mut receiver) = socket.split();

    // Outbound path first, so join notices from racing peers are never lost.
    let (tx, rx) = mpsc::unbounded_channel();
    let mut send_task = pusher_loop(rx, sender);

    let session = state.broker.connect(&room_id, participant_id, tx).await;
    state
        .broker
        .broadcast_except(
            &room_id,
            session.id,
            &format!("User {participant_id} joined the room"),
        )
        .await;

    let mut departure = Departure::Abrupt;
    loop {
        tokio::select! {
            frame = receiver.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        if text.trim() == LEAVE_SENTINEL {
                            departure = Departure::Voluntary;
                            break;
                        }
                        state
                            .broker
                            .broadcast_except(
                                &room_id,
                                session.id,
                                &format!("User {participant_id}: {text}"),
                            )
                            .await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {
                        // Ping/pong handled by the protocol; binary ignored.
                    }
                    Some(Err(e)) => {
                        tracing::warn!(
                            "WebSocket error for participant {} in room '{}': {}",
                            participant_id,
                            room_id,
                            e
                        );
                        break;
                    }
                }
            }
            // The pusher exits when the peer stops reading; treat that as a
            // dead connection rather than waiting on the next inbound frame.
            _ = &mut send_task => break,
        }
    }

    let farewell = match departure {
        Departure::Voluntary => format!("User {participant_id} left the room"),
        Departure::Abrupt => format!("User {participant_id} disconnected"),
    };
    state
        .broker
        .broadcast_except(&room_id, session.id, &farewell)
        .await;

    // Deregistration runs regardless of how the loop or farewell went.
    state.broker.disconnect(&session).await;
    send_task.abort();
    tracing::info!(
        "Connection closed for participant {} in room '{}'",
        participant_id,
        room_id
    );
}
