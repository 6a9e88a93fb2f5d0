//! WebSocket endpoint for live analytics.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::error::AppError;
use crate::realtime::publisher::{RealtimePublisher, CONNECTION_QUEUE_CAPACITY};
use crate::state::AppState;

/// Query parameters of the upgrade request.
///
/// Browsers cannot set an Authorization header on a WebSocket handshake, so
/// the bearer token travels as a query parameter instead. It is verified
/// before the upgrade and never logged.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: Option<String>,
}

/// Upgrades `GET /ws?token=...` to a live analytics stream.
///
/// The token is verified before accepting the upgrade; a missing or invalid
/// token yields a plain 401 and no WebSocket handshake takes place.
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let token = query.token.ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({ "reason": "Missing token" }),
        )
    })?;
    let owner_id = state.auth_service.verify_token(&token)?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, owner_id, state.publisher.clone())))
}

/// Pumps updates from the publisher to one dashboard socket.
///
/// The socket splits into a send half fed by the connection's queue and a
/// receive half that only watches for close frames; inbound payloads are
/// ignored. Whichever half finishes first tears the other down, and the
/// connection is always unregistered on the way out.
async fn handle_socket(socket: WebSocket, owner_id: i64, publisher: Arc<RealtimePublisher>) {
    let (tx, mut rx) = mpsc::channel(CONNECTION_QUEUE_CAPACITY);
    let connection_id = publisher.register(owner_id, tx);

    let (mut sink, mut stream) = socket.split();

    let mut send_task = tokio::spawn(async move {
        while let Some(update) = rx.recv().await {
            let payload = match serde_json::to_string(&update) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::error!(error = %e, "failed to serialize click update");
                    continue;
                }
            };

            if sink.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            if matches!(message, Message::Close(_)) {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    publisher.unregister(connection_id);
}
