//! Image processing backend trait.
//!
//! The [`ImageBackend`] trait defines the four operations every backend
//! must support: identify, top_left_pixel, resize, and resize_to. Planning
//! code never touches pixels directly, so the rest of the crate is
//! backend-agnostic and operation logic can be tested against a mock.
//!
//! The production implementation is
//! [`RustBackend`](crate::rust_backend::RustBackend) — pure Rust on the
//! `image` crate, statically linked.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::calculations::Dimensions;
use crate::params::{ResizeParams, Rgb};

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The input bytes decode to (or are) a format this library does not
    /// handle.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// Every backend must implement all four operations so operation logic
/// stays backend-agnostic. Backends are stateless: each call owns its
/// decode, and nothing is cached between calls.
pub trait ImageBackend: Sync {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Read the pixel at `(0, 0)`, alpha dropped. This is the sampling
    /// source for [`Background::Auto`](crate::params::Background::Auto).
    fn top_left_pixel(&self, path: &Path) -> Result<Rgb, BackendError>;

    /// Execute a resize: decode, resample, composite, encode to `output`.
    fn resize(&self, params: &ResizeParams, output: &Path) -> Result<(), BackendError>;

    /// Execute a resize, encoding into `writer` instead of a file.
    fn resize_to(&self, params: &ResizeParams, writer: &mut dyn Write) -> Result<(), BackendError>;
}
