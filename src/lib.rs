//! # rasterfit
//!
//! Raster image resizing (JPEG / PNG / GIF) with fit policies, per-axis
//! anchor placement, and canvas background fills.
//!
//! # Architecture: Plan, Resolve, Execute
//!
//! A resize runs through three independent steps, only the last of which
//! touches pixels:
//!
//! ```text
//! 1. Plan     dimensions + request  →  ResizePlan     (pure arithmetic)
//! 2. Resolve  background spec       →  Rgb            (hex / explicit / sampled)
//! 3. Execute  plan + color + source →  encoded image  (image crate backend)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: planning and color resolution are pure functions over
//!   value inputs; unit tests never decode an image.
//! - **Swappable pixel work**: the [`ImageBackend`] trait is the only seam
//!   that sees pixels, so operation logic can be exercised against a mock.
//! - **Inspectable plans**: [`operations::plan_resize`] returns the full
//!   work order without executing it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`calculations`] | Pure resize-plan math: policy resolution, ratio comparison, axis offsets |
//! | [`background`] | Background-color resolution: explicit RGB, hex strings, auto-sampling |
//! | [`params`] | Request/option types: policies, anchors, background specs, quality, formats |
//! | [`backend`] | The [`ImageBackend`] trait every pixel backend implements |
//! | [`rust_backend`] | Production backend on the `image` crate (Lanczos3 + JPEG/PNG/GIF codecs) |
//! | [`operations`] | High-level entry points: identify → plan → resolve → execute |
//!
//! # Design Decisions
//!
//! ## Resize Policies
//!
//! Four policies cover the useful shapes of "make this image W×H":
//! `width` and `height` scale by one axis and derive the other from the
//! source ratio; `exact` takes the request verbatim (and will distort);
//! `auto` compares the requested box's aspect ratio against the source's
//! and delegates to whichever single-axis policy fits. The ratio
//! comparison is quantized to two decimal places, so near-equal ratios
//! resolve to `exact` instead of flapping between the width and height
//! branches on float noise.
//!
//! ## Per-Axis Anchors
//!
//! Placement on the canvas uses two separate enums, [`AnchorX`] and
//! [`AnchorY`]. Each axis offset can only be computed from its own
//! anchor — passing a horizontal anchor to the vertical axis is a type
//! error, not a latent bug.
//!
//! ## Pure-Rust Imaging
//!
//! [`RustBackend`] uses the `image` crate for everything pixel-shaped:
//! content-sniffed decoding, Lanczos3 resampling, alpha-aware
//! compositing, and JPEG/PNG/GIF encoding. No system codec libraries, no
//! `apt install` — the binary that links this crate is fully
//! self-contained.

pub mod backend;
pub mod background;
pub mod calculations;
pub mod operations;
pub mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use background::ColorError;
pub use calculations::{plan, Dimensions, PlanError, ResizePlan};
pub use operations::{get_dimensions, plan_resize, resize_file, resize_to_writer, ResizeError};
pub use params::{
    AnchorX, AnchorY, Background, Format, Quality, ResizeParams, ResizePolicy, ResizeRequest, Rgb,
};
pub use rust_backend::RustBackend;
