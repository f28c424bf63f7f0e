// OpenAI vision client
// Author: kelexine (https://github.com/kelexine)

use super::{build_request, Credential, Description, COMPLETIONS_PATH, DESCRIPTION_MODEL};
use crate::config::OpenAiConfig;
use crate::error::{DescribeError, Result};
use crate::metrics::{self, Outcome};
use crate::models::openai::ChatCompletionResponse;
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Turns image bytes into a natural-language description.
///
/// Holds nothing but an HTTP client and the endpoint URL, so a single
/// instance can be cloned and shared across tasks. Each call to
/// [`DescriptionRequester::describe`] issues exactly one upstream request
/// and is never retried.
#[derive(Clone)]
pub struct DescriptionRequester {
    http_client: Client,
    endpoint: String,
}

impl DescriptionRequester {
    /// Create a requester for the configured API base URL.
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let mut builder = Client::builder().use_rustls_tls();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| DescribeError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}{}",
            config.api_base_url.trim_end_matches('/'),
            COMPLETIONS_PATH
        );
        debug!("Describe endpoint: {}", endpoint);

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Full URL of the completions endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Describe one image.
    ///
    /// Empty input and a missing or blank credential fail before any network
    /// traffic. Connection failures surface as [`DescribeError::Transport`].
    /// A response that is not JSON or has no completion is not an error: it
    /// yields [`Description::Unavailable`].
    pub async fn describe(
        &self,
        image: &[u8],
        credential: Option<&Credential>,
    ) -> Result<Description> {
        if image.is_empty() {
            metrics::record_describe(Outcome::InvalidInput);
            return Err(DescribeError::InvalidInput("image is empty".to_string()));
        }

        let credential = match credential {
            Some(c) if !c.is_empty() => c,
            _ => {
                metrics::record_describe(Outcome::MissingCredential);
                return Err(DescribeError::MissingCredential);
            }
        };

        let describe_id = uuid::Uuid::new_v4().simple().to_string();
        info!(
            "Requesting description {} for {} byte image",
            describe_id,
            image.len()
        );

        let request = build_request(image);
        let start = Instant::now();

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                metrics::record_describe(Outcome::TransportError);
                warn!("Describe request {} failed: {}", describe_id, e);
                DescribeError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            metrics::record_describe(Outcome::TransportError);
            warn!("Failed to read describe response {}: {}", describe_id, e);
            DescribeError::from(e)
        })?;

        metrics::record_upstream_duration(DESCRIPTION_MODEL, start.elapsed().as_secs_f64());
        debug!(
            "Describe response {}: HTTP {} in {:?}",
            describe_id,
            status,
            start.elapsed()
        );

        if !status.is_success() {
            warn!(
                "OpenAI API returned HTTP {} for {}: {}",
                status,
                describe_id,
                sanitize(&body.chars().take(500).collect::<String>())
            );
        }

        match parse_completion(&body) {
            Ok(text) => {
                metrics::record_describe(Outcome::Described);
                info!("Description {} received ({} chars)", describe_id, text.len());
                Ok(Description::Text(text))
            }
            Err(e) => {
                metrics::record_describe(Outcome::Unavailable);
                warn!("Description {} unavailable: {}", describe_id, e);
                Ok(Description::Unavailable)
            }
        }
    }
}

/// Extract the first completion's text from a chat completions body.
///
/// Fails with [`DescribeError::MalformedResponse`] when the body is not JSON
/// or carries no `choices[0].message.content`.
pub fn parse_completion(body: &str) -> Result<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| DescribeError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if let Some(choice) = response.choices.as_ref().and_then(|c| c.first()) {
        if let Some(reason) = &choice.finish_reason {
            debug!("Completion finish_reason: {}", reason);
        }
    }

    if let Some(text) = response.first_content() {
        return Ok(text.to_string());
    }

    let detail = match response.error {
        Some(error) => format!(
            "{}: {}",
            error.error_type.as_deref().unwrap_or("api_error"),
            sanitize(error.message.as_deref().unwrap_or("no message"))
        ),
        None => "no choices[0].message.content".to_string(),
    };
    Err(DescribeError::MalformedResponse(detail))
}
