// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::DescribeError;
use crate::vision::{check_upload, ImageFormat};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

/// Body returned by `POST /v1/describe`
#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeResponse {
    pub description: String,
    /// False when the upstream response was malformed and `description`
    /// holds the placeholder text
    pub available: bool,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Guards callers that build the router through create_router directly
    let credential_check = if state.credential.is_empty() {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: "API credential is empty".to_string(),
        }
    } else {
        HealthCheck {
            status: "ok".to_string(),
            message: "API credential configured".to_string(),
        }
    };
    checks.insert("credential".to_string(), credential_check);

    checks.insert(
        "configuration".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Endpoint: {}", state.requester.endpoint()),
        },
    );

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `/v1/describe`. The request body is the raw image.
pub async fn describe_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DescribeResponse>, DescribeError> {
    if let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        let mime = content_type.split(';').next().unwrap_or("").trim();
        if mime != "application/octet-stream" && ImageFormat::from_mime_type(mime).is_none() {
            return Err(DescribeError::UnsupportedMediaType(format!(
                "content type {} is not accepted, use image/jpeg or image/png",
                mime
            )));
        }
    }

    let format = check_upload(&body, state.config.server.max_upload_bytes)?;
    info!(
        "Received describe request: {} bytes, {}",
        body.len(),
        format.mime_type()
    );

    let description = state
        .requester
        .describe(&body, Some(state.credential.as_ref()))
        .await
        .map_err(|e| {
            error!("Describe call failed: {}", e);
            e
        })?;

    debug!("Description available: {}", description.is_available());

    Ok(Json(DescribeResponse {
        available: description.is_available(),
        description: description.into_string(),
    }))
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}
