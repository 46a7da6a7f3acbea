use axum::extract::ws::{WebSocket, Message};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn, error};

use crate::core::reader::Ea3Reader;

#[derive(Serialize)]
struct SignalPayload<'a> {
    timestamp: f64,
    value: f64,
    desc: &'a str,
    seq: u64,
    end_flag: bool,
}

/// Stream every point of one signal, then an end-flag payload.
pub async fn handle_ws_fetch(
    mut socket: WebSocket,
    reader: Arc<Ea3Reader>,
    signal_name: String,
) {
    info!("ws_fetch streaming started: {}", signal_name);

    let chunk = match reader.read_signal_by_name(&signal_name) {
        Ok(chunk) => chunk,
        Err(e) => {
            error!("read_signal failed: {}", e);
            return;
        }
    };

    // Title travels on the first point only
    let title = reader.metadata().title.as_str();
    let mut seq: u64 = 0;

    for (timestamp, value) in chunk.timestamps.iter().zip(chunk.values.iter()) {
        let payload = SignalPayload {
            timestamp: *timestamp,
            value: *value,
            desc: if seq == 0 { title } else { "" },
            seq,
            end_flag: false,
        };

        let json = match serde_json::to_string(&payload) {
            Ok(j) => j,
            Err(e) => {
                error!("json serialize error: {}", e);
                return;
            }
        };

        if let Err(e) = socket.send(Message::Text(json.into())).await {
            warn!("ws send failed: {}", e);
            return;
        }

        seq += 1;
    }

    let end_payload = SignalPayload {
        timestamp: 0.0,
        value: 0.0,
        desc: "",
        seq,
        end_flag: true,
    };

    if let Ok(json) = serde_json::to_string(&end_payload) {
        let _ = socket.send(Message::Text(json.into())).await;
    }

    info!("ws_fetch finished: {} ({} points)", signal_name, seq);
}
