//! Pure calculation functions for resize planning.
//!
//! All functions here are pure and testable without any I/O or images.
//! Given source dimensions and a [`ResizeRequest`], [`plan`] produces a
//! [`ResizePlan`]: the canvas to allocate, the size to resample the source
//! to, and the offsets at which to paste it.

use thiserror::Error;

use crate::params::{AnchorX, AnchorY, ResizePolicy, ResizeRequest};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A required target size is missing or zero for the chosen policy.
    #[error("missing or zero target {axis} for '{policy}' resize")]
    InvalidDimension {
        axis: &'static str,
        policy: ResizePolicy,
    },
    /// The source has a zero dimension, so no aspect ratio exists.
    #[error("cannot compute an aspect ratio for a zero-sized image")]
    InvalidRatio,
}

/// Pixel dimensions of a source image or a target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Geometric output of [`plan`], consumed once to drive a resample + paste.
///
/// `scaled` is the size the source is resampled to before being pasted
/// onto `canvas` at `(offset_x, offset_y)`. Every policy currently scales
/// the source to fill the canvas exactly, so the offsets come out zero;
/// they are computed through [`x_axis_offset`] / [`y_axis_offset`] all the
/// same, so any plan where `scaled` and `canvas` diverge is positioned
/// correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub canvas: Dimensions,
    pub scaled: Dimensions,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Compute a [`ResizePlan`] for resizing `source` per `request`.
///
/// # Examples
///
/// ```
/// use rasterfit::calculations::{plan, Dimensions};
/// use rasterfit::params::ResizeRequest;
///
/// let plan = plan(Dimensions::new(1000, 500), &ResizeRequest::width(10)).unwrap();
/// assert_eq!(plan.canvas, Dimensions::new(10, 5));
/// ```
pub fn plan(source: Dimensions, request: &ResizeRequest) -> Result<ResizePlan, PlanError> {
    let canvas = match request.policy {
        ResizePolicy::Width => width_dimensions(source, request)?,
        ResizePolicy::Height => height_dimensions(source, request)?,
        ResizePolicy::Exact => exact_dimensions(request)?,
        ResizePolicy::Auto => {
            // Delegate to the policy the ratio comparison picks. The
            // delegated policy is never Auto, so this recurses once.
            let mut delegated = request.clone();
            delegated.policy = auto_policy(source, request)?;
            return plan(source, &delegated);
        }
    };

    // Every policy scales the source to the full canvas.
    let scaled = canvas;

    Ok(ResizePlan {
        canvas,
        scaled,
        offset_x: x_axis_offset(canvas.width, scaled.width, request.anchor_x),
        offset_y: y_axis_offset(canvas.height, scaled.height, request.anchor_y),
    })
}

/// Pick the policy an auto resize delegates to.
///
/// Compares the requested and source aspect ratios after quantizing both
/// to two decimal places: a narrower request than the source scales by
/// width, a wider one by height, and a tie falls through to exact.
fn auto_policy(source: Dimensions, request: &ResizeRequest) -> Result<ResizePolicy, PlanError> {
    let width = require(request.width, "width", ResizePolicy::Auto)?;
    let height = require(request.height, "height", ResizePolicy::Auto)?;

    let requested = ratio_hundredths(width, height)?;
    let original = ratio_hundredths(source.width, source.height)?;

    Ok(if requested < original {
        ResizePolicy::Width
    } else if requested > original {
        ResizePolicy::Height
    } else {
        ResizePolicy::Exact
    })
}

/// Aspect ratio quantized to hundredths.
///
/// Ratios are only ever compared at two decimal places, so 1.333 and 1.334
/// are equal for orientation purposes. This is a deliberate fixed-point
/// comparison policy, not float equality: near-equal ratios take the
/// exact-resize branch instead of flapping between width and height.
fn ratio_hundredths(width: u32, height: u32) -> Result<i64, PlanError> {
    if width == 0 || height == 0 {
        return Err(PlanError::InvalidRatio);
    }
    Ok((width as f64 / height as f64 * 100.0).round() as i64)
}

fn width_dimensions(source: Dimensions, request: &ResizeRequest) -> Result<Dimensions, PlanError> {
    let width = require(request.width, "width", ResizePolicy::Width)?;
    if source.width == 0 || source.height == 0 {
        return Err(PlanError::InvalidRatio);
    }

    let scale = width as f64 / source.width as f64;
    // A canvas dimension of zero is never valid, so extreme downscales
    // bottom out at one pixel.
    let height = (source.height as f64 * scale).round().max(1.0) as u32;

    Ok(Dimensions::new(width, height))
}

fn height_dimensions(source: Dimensions, request: &ResizeRequest) -> Result<Dimensions, PlanError> {
    let height = require(request.height, "height", ResizePolicy::Height)?;
    if source.width == 0 || source.height == 0 {
        return Err(PlanError::InvalidRatio);
    }

    let scale = height as f64 / source.height as f64;
    let width = (source.width as f64 * scale).round().max(1.0) as u32;

    Ok(Dimensions::new(width, height))
}

fn exact_dimensions(request: &ResizeRequest) -> Result<Dimensions, PlanError> {
    let width = require(request.width, "width", ResizePolicy::Exact)?;
    let height = require(request.height, "height", ResizePolicy::Exact)?;
    Ok(Dimensions::new(width, height))
}

fn require(value: Option<u32>, axis: &'static str, policy: ResizePolicy) -> Result<u32, PlanError> {
    match value {
        Some(v) if v > 0 => Ok(v),
        _ => Err(PlanError::InvalidDimension { axis, policy }),
    }
}

/// Horizontal offset of a `scaled`-wide image on a `canvas`-wide canvas.
///
/// Zero whenever the canvas is no wider than the image (nothing to
/// position), otherwise placed per the anchor.
pub fn x_axis_offset(canvas: u32, scaled: u32, anchor: AnchorX) -> u32 {
    if canvas <= scaled {
        return 0;
    }
    match anchor {
        AnchorX::Left => 0,
        AnchorX::Center => (canvas - scaled) / 2,
        AnchorX::Right => canvas - scaled,
    }
}

/// Vertical offset of a `scaled`-tall image on a `canvas`-tall canvas.
pub fn y_axis_offset(canvas: u32, scaled: u32, anchor: AnchorY) -> u32 {
    if canvas <= scaled {
        return 0;
    }
    match anchor {
        AnchorY::Top => 0,
        AnchorY::Middle => (canvas - scaled) / 2,
        AnchorY::Bottom => canvas - scaled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Width / Height policy tests
    // =========================================================================

    #[test]
    fn width_derives_height_from_source_ratio() {
        // 1000x500 at width 10 → 10x5
        let plan = plan(Dimensions::new(1000, 500), &ResizeRequest::width(10)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(10, 5));
        assert_eq!(plan.scaled, plan.canvas);
    }

    #[test]
    fn width_rounds_derived_height() {
        // 600x1000 at width 100 → height = 1000 * (100/600) = 166.67 → 167
        let plan = plan(Dimensions::new(600, 1000), &ResizeRequest::width(100)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(100, 167));
    }

    #[test]
    fn height_derives_width_from_source_ratio() {
        // 1000x600 at height 20 → width = 1000 * (20/600) = 33.33 → 33
        let plan = plan(Dimensions::new(1000, 600), &ResizeRequest::height(20)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(33, 20));
    }

    #[test]
    fn width_upscales_as_well_as_downscales() {
        let plan = plan(Dimensions::new(100, 50), &ResizeRequest::width(400)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(400, 200));
    }

    #[test]
    fn extreme_downscale_keeps_canvas_at_least_one_pixel() {
        // 1000x1 at width 10 would derive a 0.01px height
        let plan = plan(Dimensions::new(1000, 1), &ResizeRequest::width(10)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(10, 1));
    }

    // =========================================================================
    // Exact policy tests
    // =========================================================================

    #[test]
    fn exact_uses_requested_dimensions_verbatim() {
        // 800x600 to exactly 10x100, ignoring the source ratio
        let plan = plan(Dimensions::new(800, 600), &ResizeRequest::exact(10, 100)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(10, 100));
        assert_eq!((plan.offset_x, plan.offset_y), (0, 0));
    }

    // =========================================================================
    // Auto policy tests
    // =========================================================================

    #[test]
    fn auto_on_portrait_source_with_wide_request_delegates_to_height() {
        // 400x600 source ratio 0.67; requested 40x4 ratio 10.00 → height
        // drives: width = 400 * (4/600) = 2.67 → 3
        let plan = plan(Dimensions::new(400, 600), &ResizeRequest::auto(40, 4)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(3, 4));
    }

    #[test]
    fn auto_on_landscape_source_with_narrow_request_delegates_to_width() {
        // 1000x500 source ratio 2.00; requested 10x10 ratio 1.00 → width
        // drives: height = 500 * (10/1000) = 5
        let plan = plan(Dimensions::new(1000, 500), &ResizeRequest::auto(10, 10)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(10, 5));
    }

    #[test]
    fn auto_on_square_source_with_square_request_delegates_to_exact() {
        let plan = plan(Dimensions::new(500, 500), &ResizeRequest::auto(40, 40)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(40, 40));
    }

    #[test]
    fn auto_ratio_tie_within_hundredths_is_exact() {
        // 400x300 is 1.33; a 1333x1000 request is 1.333 → also 1.33 after
        // quantizing, so neither axis wins and the request is taken verbatim.
        let plan = plan(Dimensions::new(400, 300), &ResizeRequest::auto(1333, 1000)).unwrap();
        assert_eq!(plan.canvas, Dimensions::new(1333, 1000));
    }

    #[test]
    fn auto_ratio_difference_at_hundredths_picks_an_axis() {
        // 400x300 is 1.33; a 1300x1000 request is 1.30 < 1.33 → width drives.
        let plan = plan(Dimensions::new(400, 300), &ResizeRequest::auto(1300, 1000)).unwrap();
        assert_eq!(plan.canvas.width, 1300);
        assert_eq!(plan.canvas.height, 975);
    }

    // =========================================================================
    // Error tests
    // =========================================================================

    #[test]
    fn width_without_target_width_is_invalid() {
        let request = ResizeRequest {
            policy: ResizePolicy::Width,
            ..ResizeRequest::default()
        };
        assert_eq!(
            plan(Dimensions::new(100, 100), &request),
            Err(PlanError::InvalidDimension {
                axis: "width",
                policy: ResizePolicy::Width
            })
        );
    }

    #[test]
    fn zero_target_is_invalid() {
        let result = plan(Dimensions::new(100, 100), &ResizeRequest::exact(0, 50));
        assert_eq!(
            result,
            Err(PlanError::InvalidDimension {
                axis: "width",
                policy: ResizePolicy::Exact
            })
        );
    }

    #[test]
    fn auto_requires_both_targets() {
        let request = ResizeRequest {
            width: Some(100),
            ..ResizeRequest::default()
        };
        assert_eq!(
            plan(Dimensions::new(100, 100), &request),
            Err(PlanError::InvalidDimension {
                axis: "height",
                policy: ResizePolicy::Auto
            })
        );
    }

    #[test]
    fn zero_sized_source_is_an_invalid_ratio() {
        let result = plan(Dimensions::new(0, 600), &ResizeRequest::width(10));
        assert_eq!(result, Err(PlanError::InvalidRatio));

        let result = plan(Dimensions::new(600, 0), &ResizeRequest::auto(10, 10));
        assert_eq!(result, Err(PlanError::InvalidRatio));
    }

    // =========================================================================
    // Axis offset tests
    // =========================================================================

    #[test]
    fn x_offset_anchor_table() {
        assert_eq!(x_axis_offset(100, 40, AnchorX::Left), 0);
        assert_eq!(x_axis_offset(100, 40, AnchorX::Center), 30);
        assert_eq!(x_axis_offset(100, 40, AnchorX::Right), 60);
    }

    #[test]
    fn y_offset_anchor_table() {
        assert_eq!(y_axis_offset(100, 40, AnchorY::Top), 0);
        assert_eq!(y_axis_offset(100, 40, AnchorY::Middle), 30);
        assert_eq!(y_axis_offset(100, 40, AnchorY::Bottom), 60);
    }

    #[test]
    fn center_offset_floors_odd_differences() {
        assert_eq!(x_axis_offset(101, 40, AnchorX::Center), 30);
        assert_eq!(y_axis_offset(7, 2, AnchorY::Middle), 2);
    }

    #[test]
    fn offset_is_zero_when_image_fills_or_overflows_canvas() {
        assert_eq!(x_axis_offset(40, 40, AnchorX::Right), 0);
        assert_eq!(x_axis_offset(40, 100, AnchorX::Center), 0);
        assert_eq!(y_axis_offset(40, 100, AnchorY::Bottom), 0);
    }

    #[test]
    fn offset_never_exceeds_canvas_minus_image() {
        for canvas in [1u32, 7, 40, 100, 333] {
            for scaled in [1u32, 7, 40, 100, 333] {
                for anchor in [AnchorX::Left, AnchorX::Center, AnchorX::Right] {
                    let offset = x_axis_offset(canvas, scaled, anchor);
                    assert!(offset <= canvas.saturating_sub(scaled));
                }
            }
        }
    }
}
