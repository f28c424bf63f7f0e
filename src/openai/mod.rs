// OpenAI vision client module
// Author: kelexine (https://github.com/kelexine)

mod client;
mod prompt;

pub use client::{parse_completion, DescriptionRequester};
pub use prompt::{build_request, image_data_uri, DESCRIPTION_PROMPT};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Model used for every description request
pub const DESCRIPTION_MODEL: &str = "gpt-4o-mini";

/// Upper bound on generated tokens per description
pub const MAX_COMPLETION_TOKENS: u32 = 3000;

/// Path appended to the configured API base URL
pub const COMPLETIONS_PATH: &str = "/chat/completions";

/// Bearer API key for the upstream service.
///
/// Held only for the duration of a call chain, wiped on drop and never
/// printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

// Custom Debug impl that never logs the token
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

/// Outcome of a successful describe call.
///
/// `Unavailable` is returned when the upstream body could not be parsed or
/// carried no completion. It is distinct from a well-formed but empty
/// `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Text(String),
    Unavailable,
}

impl Description {
    /// Rendered in place of a description when the response was malformed
    pub const UNAVAILABLE_TEXT: &'static str = "Description not available";

    pub fn as_str(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Unavailable => Self::UNAVAILABLE_TEXT,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Description::Text(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Description::Text(text) => text,
            Description::Unavailable => Self::UNAVAILABLE_TEXT.to_string(),
        }
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
