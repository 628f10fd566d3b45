//! HTTP client for the DeepSeek chat-completion endpoint.

use std::time::Duration;

use reqwest::Client;

use super::error::ChatError;
use super::types::{ChatRequest, Message};

/// Connection settings for [`DeepSeekClient`], fixed at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

/// Client for the DeepSeek chat-completion API.
///
/// Holds its own connection pool; cheap to share behind an `Arc`.
pub struct DeepSeekClient {
    client: Client,
    config: ClientConfig,
}

impl DeepSeekClient {
    pub fn new(config: ClientConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Make a single chat completion request and return the raw response body.
    ///
    /// The body comes back exactly as the provider sent it; interpreting the
    /// JSON envelope is the caller's concern. No retries.
    pub async fn complete(&self, messages: Vec<Message>) -> Result<String, ChatError> {
        if messages.is_empty() {
            return Err(ChatError::InvalidRequest("messages must not be empty"));
        }

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
        };
        let url = format!("{}/chat/completions", self.config.endpoint);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Provider { status, body });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(endpoint: String) -> DeepSeekClient {
        DeepSeekClient::new(ClientConfig {
            endpoint,
            api_key: "sk-test".to_string(),
            model: "deepseek-chat".to_string(),
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn user_message(content: &str) -> Vec<Message> {
        vec![Message {
            role: Role::User,
            content: content.to_string(),
        }]
    }

    #[tokio::test]
    async fn test_complete_returns_raw_body() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#;
        let router =
            Router::new().route("/chat/completions", post(move || async move { body }));
        let endpoint = spawn_stub(router).await;

        let client = client_for(endpoint);
        let response = client.complete(user_message("hello")).await.unwrap();
        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_complete_sets_bearer_auth() {
        let router = Router::new().route(
            "/chat/completions",
            post(|headers: HeaderMap| async move {
                headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );
        let endpoint = spawn_stub(router).await;

        let client = client_for(endpoint);
        let echoed = client.complete(user_message("hello")).await.unwrap();
        assert_eq!(echoed, "Bearer sk-test");
    }

    #[tokio::test]
    async fn test_complete_sends_model_and_messages() {
        let router = Router::new().route(
            "/chat/completions",
            post(|body: String| async move { body }),
        );
        let endpoint = spawn_stub(router).await;

        let client = client_for(endpoint);
        let echoed = client.complete(user_message("draw a chart")).await.unwrap();
        assert!(echoed.contains("\"model\":\"deepseek-chat\""));
        assert!(echoed.contains("\"role\":\"user\""));
        assert!(echoed.contains("\"content\":\"draw a chart\""));
    }

    #[tokio::test]
    async fn test_non_success_status_is_provider_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, r#"{"error":"invalid api key"}"#) }),
        );
        let endpoint = spawn_stub(router).await;

        let client = client_for(endpoint);
        let err = client.complete(user_message("hello")).await.unwrap_err();
        match err {
            ChatError::Provider { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid api key"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Bind then drop so nothing is listening on the port.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"));
        let err = client.complete(user_message("hello")).await.unwrap_err();
        assert!(matches!(err, ChatError::Network(_)));
    }

    #[tokio::test]
    async fn test_empty_messages_rejected_before_send() {
        let client = client_for("http://127.0.0.1:1".to_string());
        let err = client.complete(Vec::new()).await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidRequest(_)));
    }
}
