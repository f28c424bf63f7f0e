// image-describer - Hyper-detail image descriptions from the OpenAI vision API
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod openai;
pub mod server;
pub mod utils;
pub mod vision;

pub use error::{DescribeError, Result};
pub use openai::{Credential, Description, DescriptionRequester};
