//! Request dispatch for the TUI

use tokio::sync::mpsc::UnboundedSender;

use super::event::AppEvent;
use crate::client::ChatClient;

/// Send one chat message and post the resolution back to the event loop.
///
/// Each submission runs as its own task; overlapping submissions resolve
/// independently through their pending handles.
pub async fn fetch_reply(
    client: ChatClient,
    text: String,
    pending_id: String,
    tx: UnboundedSender<AppEvent>,
) {
    let outcome = match client.send(&text).await {
        Ok(reply) => Ok(reply),
        Err(err) => {
            tracing::warn!("chat request failed: {err}");
            Err(err.to_string())
        }
    };
    let _ = tx.send(AppEvent::Reply {
        pending_id,
        outcome,
    });
}
