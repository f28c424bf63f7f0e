// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use axum::extract::DefaultBodyLimit;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Assign an `x-request-id` to requests lacking one and echo it on responses
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Upload size enforcement.
///
/// axum's extractor default (2MB) is lifted and replaced by a tower limit,
/// which answers oversized bodies with 413 before the handler runs.
pub fn upload_limit_layers(max_bytes: usize) -> (DefaultBodyLimit, RequestBodyLimitLayer) {
    (
        DefaultBodyLimit::disable(),
        RequestBodyLimitLayer::new(max_bytes),
    )
}
