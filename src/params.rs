//! Parameter types for resize operations.
//!
//! These types describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](crate::operations) module
//! (which decides what a resize should produce) and the
//! [`backend`](crate::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock)
//! without changing planning logic.
//!
//! ## Types
//!
//! - [`ResizePolicy`] — How target dimensions are derived from a request.
//! - [`AnchorX`] / [`AnchorY`] — Per-axis placement of the scaled image on
//!   the canvas. Two separate types so a horizontal anchor can never be
//!   applied to the vertical axis, or vice versa.
//! - [`Background`] — Canvas fill specification, resolved once per call by
//!   [`background::resolve`](crate::background::resolve).
//! - [`Quality`] — Encoding quality (1–10, default 10). Clamped on construction.
//! - [`Format`] — Output image format (JPEG / PNG / GIF).
//! - [`ResizeRequest`] — Full description of a requested resize.
//! - [`ResizeParams`] — Full work order handed to a backend.
//!
//! The enums serialize as lowercase strings (`"auto"`, `"center"`, …) so a
//! request can be driven from a config file or wire payload.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calculations::ResizePlan;

/// How target dimensions are derived from a resize request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Best fit: keeps the source aspect ratio by choosing which axis
    /// drives the scale. The result may not match both requested sizes.
    #[default]
    Auto,
    /// Height is derived from the requested width.
    Width,
    /// Width is derived from the requested height.
    Height,
    /// Exact requested size. The source is stretched if the ratios differ.
    Exact,
}

impl fmt::Display for ResizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResizePolicy::Auto => "auto",
            ResizePolicy::Width => "width",
            ResizePolicy::Height => "height",
            ResizePolicy::Exact => "exact",
        };
        f.write_str(name)
    }
}

/// Horizontal placement of the scaled image on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorX {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of the scaled image on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorY {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// A resolved background color. Channel ranges are enforced by `u8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Canvas background fill specification.
///
/// Resolved to a concrete [`Rgb`] once per resize call by
/// [`background::resolve`](crate::background::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Explicit channel values.
    Rgb(Rgb),
    /// Hex string, with or without a leading `#`; 3 or 6 hex digits.
    Hex(String),
    /// Sample the source image's top-left pixel.
    Auto,
}

impl Default for Background {
    /// White, as a 6-digit hex string.
    fn default() -> Self {
        Background::Hex(String::from("#ffffff"))
    }
}

/// A resize request: target sizes plus placement and fill options.
///
/// `width`/`height` requirements depend on the policy: [`ResizePolicy::Width`]
/// needs `width`, [`ResizePolicy::Height`] needs `height`, and
/// [`ResizePolicy::Auto`] / [`ResizePolicy::Exact`] need both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeRequest {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub policy: ResizePolicy,
    pub background: Background,
    pub anchor_x: AnchorX,
    pub anchor_y: AnchorY,
}

impl ResizeRequest {
    /// Best-fit resize into a `width` × `height` bounding box.
    pub fn auto(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Resize to `width`, deriving the height from the source ratio.
    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            policy: ResizePolicy::Width,
            ..Self::default()
        }
    }

    /// Resize to `height`, deriving the width from the source ratio.
    pub fn height(height: u32) -> Self {
        Self {
            height: Some(height),
            policy: ResizePolicy::Height,
            ..Self::default()
        }
    }

    /// Resize to exactly `width` × `height`, stretching if needed.
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            policy: ResizePolicy::Exact,
            ..Self::default()
        }
    }
}

/// Quality setting for encoded output (1-10).
///
/// The backend maps this to each codec's native scale: ×10 for JPEG's
/// 0–100, minus one for PNG's 0–9 compression levels. GIF output ignores
/// it (lossless).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 10))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(10)
    }
}

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Jpeg,
    Png,
    Gif,
}

impl Format {
    /// Infer an output format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Format::Jpeg),
            "png" => Some(Format::Png),
            "gif" => Some(Format::Gif),
            _ => None,
        }
    }
}

/// Full work order for one resize: where pixels come from, where they land
/// on the canvas, and how the result is encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub plan: ResizePlan,
    pub background: Rgb,
    pub quality: Quality,
    pub format: Format,
}
