//! Gemini client implementation

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, Response, StatusCode};
use std::time::Duration;

use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResponse},
};

use super::mapper::{
    from_error_body, from_gemini_response, from_rate_limit_body, to_gemini_request,
};
use super::types::GenerateContentResponse;

/// Public Generative Language API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Client for the Gemini `generateContent` API, authenticated with an API key
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent with every request
    api_key: String,
    /// Scheme and host, without a trailing slash
    base_url: String,
    /// Model identifier, e.g. `gemini-2.0-flash`
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Generative Language API key
    /// * `model` - Model identifier
    /// * `base_url` - API base URL, normally [`DEFAULT_BASE_URL`]
    /// * `timeout` - Whole-request timeout; `None` keeps the HTTP client default
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder().connect_timeout(Duration::from_secs(5));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| LlmError::HttpError {
            status: 0,
            body: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the endpoint URL for a single generation
    fn build_endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn make_request(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let gemini_request = to_gemini_request(request);
        let url = self.build_endpoint_url();

        tracing::debug!(
            model = %self.model,
            contents = gemini_request.contents.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&gemini_request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = read_body(response).await?;
            return Err(from_rate_limit_body(body, retry_after));
        }
        if !status.is_success() {
            let body = read_body(response).await?;
            return Err(from_error_body(status.as_u16(), body));
        }

        let body = read_body(response).await?;
        let gemini_response: GenerateContentResponse = serde_json::from_str(&body)?;
        let result = from_gemini_response(gemini_response)?;

        if let Some(usage) = &result.usage {
            tracing::debug!(
                model = %self.model,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Gemini generation complete"
            );
        }

        Ok(result)
    }
}

/// Read the whole response body, keeping the status when the read fails
async fn read_body(response: Response) -> Result<String, LlmError> {
    let status = response.status().as_u16();
    response.text().await.map_err(|e| LlmError::HttpError {
        status,
        body: format!("failed to read response body: {}", e),
    })
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.make_request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::core::config::GenerationConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Serve a single canned HTTP response and return the base URL
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_request(&mut stream).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });

        format!("http://{}", addr)
    }

    /// Consume the request head and its body so the client sees a clean exchange
    async fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }

    fn http_response(status: &str, content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        )
    }

    async fn generate_against(base_url: String) -> Result<GenerateResponse, LlmError> {
        let client = GeminiClient::new("key".to_string(), DEFAULT_MODEL, base_url, None).unwrap();
        client
            .generate(GenerateRequest::prompt("Hello", GenerationConfig::default()))
            .await
    }

    #[test]
    fn test_endpoint_url_format() {
        let client =
            GeminiClient::new("key".to_string(), DEFAULT_MODEL, DEFAULT_BASE_URL, None).unwrap();

        assert_eq!(
            client.build_endpoint_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GeminiClient::new(
            "key".to_string(),
            "gemini-2.5-flash",
            "http://localhost:8080/",
            Some(Duration::from_secs(30)),
        )
        .unwrap();

        assert_eq!(client.model(), "gemini-2.5-flash");
        assert_eq!(
            client.build_endpoint_url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        // Port 1 on loopback refuses connections.
        let client =
            GeminiClient::new("key".to_string(), DEFAULT_MODEL, "http://127.0.0.1:1", None)
                .unwrap();

        let err = client
            .generate(GenerateRequest::prompt("Hello", GenerationConfig::default()))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::HttpError { status: 0, .. }));
    }

    #[tokio::test]
    async fn test_success_response_is_parsed() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hi there"}]},"finishReason":"STOP"}]}"#;
        let base_url = serve_once(http_response("200 OK", "application/json", body)).await;

        let response = generate_against(base_url).await.unwrap();
        assert_eq!(response.text, "Hi there");
    }

    #[tokio::test]
    async fn test_rate_limit_keeps_provider_message() {
        let body = r#"{"error":{"code":429,"message":"You exceeded your current quota, please check your plan.","status":"RESOURCE_EXHAUSTED"}}"#;
        let response = format!(
            "HTTP/1.1 429 Too Many Requests\r\nRetry-After: 30\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let base_url = serve_once(response).await;

        let err = generate_against(base_url).await.unwrap_err();
        match &err {
            LlmError::RateLimitExceeded {
                message,
                retry_after,
            } => {
                assert!(message.contains("exceeded your current quota"));
                assert_eq!(*retry_after, Some(Duration::from_secs(30)));
            }
            other => panic!("Expected rate limit error, got {:?}", other),
        }
        assert!(err.to_string().contains("exceeded your current quota"));
        assert!(!err.to_string().contains("Some("));
    }

    #[tokio::test]
    async fn test_structured_error_body_is_provider_error() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let base_url = serve_once(http_response("400 Bad Request", "application/json", body)).await;

        let err = generate_against(base_url).await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::ProviderError { ref code, .. } if code == "INVALID_ARGUMENT"
        ));
    }

    #[tokio::test]
    async fn test_plain_error_body_is_http_error() {
        let base_url = serve_once(http_response(
            "500 Internal Server Error",
            "text/plain",
            "upstream exploded",
        ))
        .await;

        let err = generate_against(base_url).await.unwrap_err();
        match err {
            LlmError::HttpError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("Expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_truncated_error_body_reports_read_failure() {
        // Advertises more bytes than it sends, then closes.
        let response = "HTTP/1.1 503 Service Unavailable\r\nContent-Type: text/plain\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial"
            .to_string();
        let base_url = serve_once(response).await;

        let err = generate_against(base_url).await.unwrap_err();
        match err {
            LlmError::HttpError { status, body } => {
                assert_eq!(status, 503);
                assert!(body.contains("failed to read response body"), "{}", body);
            }
            other => panic!("Expected HTTP error, got {:?}", other),
        }
    }
}
