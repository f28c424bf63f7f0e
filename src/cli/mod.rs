// CLI module for image-describer
// Author: kelexine (https://github.com/kelexine)

use crate::error::{DescribeError, Result};
use crate::openai::Credential;
use crate::vision::{check_upload, ImageFormat, MAX_IMAGE_SIZE_BYTES};
use clap::Parser;
use std::path::{Path, PathBuf};

/// image-describer - Hyper-detail image descriptions from the OpenAI vision API
#[derive(Parser, Debug)]
#[command(name = "image-describer", version, about, long_about = None)]
pub struct Args {
    /// Describe this JPEG/PNG file, print the result and exit instead of serving
    #[arg(long, short = 'i', value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Args {
    /// API key from `--api-key` or `OPENAI_API_KEY`. Unset and blank values
    /// both yield `None`, in which case no request may be built.
    pub fn credential(&self) -> Option<Credential> {
        self.api_key
            .as_deref()
            .map(Credential::new)
            .filter(|c| !c.is_empty())
    }
}

/// Read an image file for one-shot mode.
///
/// Only `.jpg`, `.jpeg` and `.png` files are accepted, and the contents must
/// match one of those formats.
pub fn read_image(path: &Path) -> Result<Vec<u8>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if ImageFormat::from_extension(ext).is_none() {
        return Err(DescribeError::UnsupportedMediaType(format!(
            "{} is not a .jpg, .jpeg or .png file",
            path.display()
        )));
    }

    let data = std::fs::read(path)?;
    check_upload(&data, MAX_IMAGE_SIZE_BYTES)?;
    Ok(data)
}
