// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{describe_handler, health_handler, metrics_handler};
use super::middleware::{request_id_layers, upload_limit_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::openai::{Credential, DescriptionRequester};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub requester: Arc<DescriptionRequester>,
    pub credential: Arc<Credential>,
}

pub fn create_router(
    config: AppConfig,
    requester: DescriptionRequester,
    credential: Credential,
) -> Result<Router> {
    let upload_limit = config.server.max_upload_bytes;
    let state = AppState {
        config,
        requester: Arc::new(requester),
        credential: Arc::new(credential),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();
    let (lift_default_limit, body_limit) = upload_limit_layers(upload_limit);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/v1/describe", post(describe_handler))
        .layer(lift_default_limit)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
