// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{gather_metrics, DESCRIBE_DURATION, DESCRIBE_REQUESTS};

/// Outcome label for a describe call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Described,
    Unavailable,
    InvalidInput,
    MissingCredential,
    TransportError,
}

impl Outcome {
    pub fn as_label(&self) -> &'static str {
        match self {
            Outcome::Described => "described",
            Outcome::Unavailable => "unavailable",
            Outcome::InvalidInput => "invalid_input",
            Outcome::MissingCredential => "missing_credential",
            Outcome::TransportError => "transport_error",
        }
    }
}

/// Helper to record a describe call outcome
pub fn record_describe(outcome: Outcome) {
    DESCRIBE_REQUESTS
        .with_label_values(&[outcome.as_label()])
        .inc();
}

/// Helper to record upstream call latency
pub fn record_upstream_duration(model: &str, duration_secs: f64) {
    DESCRIBE_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}
