//! HTTP client for the chat endpoint.
//!
//! One exchange per submission: POST `{"message": ...}` and read back
//! `{"response": ...}`. Failures are surfaced to the conversation as error
//! entries; nothing is retried.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outbound request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Expected success response body.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Error type for chat requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (connection refused, DNS, closed socket).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the success range.
    #[error("server responded with {0}")]
    Server(StatusCode),

    /// The body was not the expected JSON shape.
    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Client for a single chat endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    /// Create a client posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message and return the reply text.
    ///
    /// No timeout is applied; a hung request resolves only when the
    /// transport itself gives up.
    pub async fn send(&self, text: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest {
                message: text.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server(status));
        }

        let body = response.text().await?;
        let reply: ChatReply = serde_json::from_str(&body)?;
        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn chat_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn chat_url(server: &MockServer) -> String {
        format!("{}/chat", server.uri())
    }

    #[tokio::test]
    async fn test_send_returns_reply_text() {
        let server = chat_server(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "Hi there"})),
        )
        .await;

        let client = ChatClient::new(chat_url(&server));
        assert_eq!(client.send("Hello").await.unwrap(), "Hi there");
    }

    #[tokio::test]
    async fn test_send_posts_json_message_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"message": "Hello"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ChatClient::new(chat_url(&server));
        client.send("Hello").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_server_error() {
        let server = chat_server(ResponseTemplate::new(500)).await;

        let client = ChatClient::new(chat_url(&server));
        let err = client.send("Hello").await.unwrap_err();
        assert!(matches!(err, ClientError::Server(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = chat_server(ResponseTemplate::new(200).set_body_string("not json")).await;

        let client = ChatClient::new(chat_url(&server));
        let err = client.send("Hello").await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_response_field_is_malformed() {
        let server = chat_server(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"reply": "Hi"})),
        )
        .await;

        let client = ChatClient::new(chat_url(&server));
        let err = client.send("Hello").await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // Grab a free port, then drop the listener so nothing answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ChatClient::new(format!("http://{addr}/chat"));
        let err = client.send("Hello").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
