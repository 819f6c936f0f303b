//! High-level resize operations.
//!
//! These functions combine planning with backend execution: identify the
//! source, compute the plan, resolve the background fill, and hand the
//! backend a full work order. [`plan_resize`] stops before execution,
//! which is what tests (and callers that only need the numbers) want.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::backend::{BackendError, ImageBackend};
use crate::background::{self, ColorError};
use crate::calculations::{self, PlanError};
use crate::params::{Background, Format, Quality, ResizeParams, ResizeRequest, Rgb};

/// Errors surfaced by the high-level operations.
#[derive(Error, Debug)]
pub enum ResizeError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The output path's extension does not name a supported format.
    #[error("cannot infer an output format from '{path}': expected a jpg, jpeg, png, or gif extension")]
    UnknownOutputFormat { path: String },
}

/// Result type for resize operations.
pub type Result<T> = std::result::Result<T, ResizeError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Compute the full work order for a resize without executing it.
///
/// The source is decoded for its top-left pixel only when the request asks
/// for an auto-sampled background.
pub fn plan_resize(
    backend: &impl ImageBackend,
    source: &Path,
    request: &ResizeRequest,
    quality: Quality,
    format: Format,
) -> Result<ResizeParams> {
    let dims = backend.identify(source)?;
    let plan = calculations::plan(dims, request)?;

    let sampled = match request.background {
        Background::Auto => backend.top_left_pixel(source)?,
        _ => Rgb::default(), // not consulted
    };
    let background = background::resolve(&request.background, || sampled)?;

    Ok(ResizeParams {
        source: source.to_path_buf(),
        plan,
        background,
        quality,
        format,
    })
}

/// Resize `source` into `output`, inferring the output format from the
/// output path's extension.
pub fn resize_file(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    request: &ResizeRequest,
    quality: Quality,
) -> Result<()> {
    let format = Format::from_path(output).ok_or_else(|| ResizeError::UnknownOutputFormat {
        path: output.display().to_string(),
    })?;

    let params = plan_resize(backend, source, request, quality, format)?;
    backend.resize(&params, output)?;
    Ok(())
}

/// Resize `source` and encode the result into `writer` as `format`.
pub fn resize_to_writer(
    backend: &impl ImageBackend,
    source: &Path,
    writer: &mut dyn Write,
    format: Format,
    request: &ResizeRequest,
    quality: Quality,
) -> Result<()> {
    let params = plan_resize(backend, source, request, quality, format)?;
    backend.resize_to(&params, writer)?;
    Ok(())
}
