//! Data models for the upstream OpenAI chat completions API.
//!
//! Only the subset needed to send one vision prompt and read back the first
//! completion is modelled here.

// Author: kelexine (https://github.com/kelexine)

pub mod openai;

pub use openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentPart, ImageUrl};
