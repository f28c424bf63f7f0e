//! Axum-based HTTP server for the image describer.
//!
//! Accepts raw JPEG/PNG uploads on `POST /v1/describe` and returns the
//! generated description as JSON.
//!
//! # Components
//!
//! - `handlers`: Implementation of the describe, health and metrics endpoints.
//! - `middleware`: Request ID tracking layers.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{DescribeResponse, HealthResponse};
pub use routes::{create_router, AppState};
