//! Image format detection and upload validation.
//!
//! The describer only accepts JPEG and PNG uploads. Formats are detected
//! from the leading magic bytes rather than trusted from a client-supplied
//! content type.
//!
//! # Submodules
//!
//! - `models`: Supported formats, detection and size constraints.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;

pub use models::{check_upload, detect_format, ImageFormat, MAX_IMAGE_SIZE_BYTES};
