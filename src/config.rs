//! Configuration for the chat client.

/// Endpoint chat messages are posted to.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";

/// Runtime settings.
///
/// The endpoint is fixed for the shipped binary. It is still carried as a
/// value so the client receives it explicitly at construction and tests can
/// substitute a local server.
#[derive(Debug, Clone)]
pub struct Settings {
    /// URL chat messages are posted to.
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
