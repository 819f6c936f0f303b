//! Production backend on the pure-Rust `image` crate.
//!
//! Everything is statically linked; no system codec libraries are needed.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header read only) |
//! | Decode (JPEG, PNG, GIF) | `image::ImageReader` with content sniffing |
//! | Resample | `image::imageops::resize` with `Lanczos3` filter |
//! | Composite | `image::imageops::overlay` onto a background-filled RGBA canvas |
//! | Encode JPEG | `JpegEncoder::new_with_quality`, alpha flattened |
//! | Encode PNG | `PngEncoder::new_with_quality`, alpha preserved |
//! | Encode GIF | `GifEncoder` (lossless, quality ignored) |

use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{self, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, Rgba, RgbaImage};

use crate::backend::{BackendError, ImageBackend};
use crate::calculations::Dimensions;
use crate::params::{Format, Quality, ResizeParams, Rgb};

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image after verifying the content-sniffed format is one this
/// library handles. Detection is by magic bytes, not file extension.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format().ok_or_else(|| {
        BackendError::UnsupportedFormat(format!("unrecognized image data in {}", path.display()))
    })?;
    supported_format(format)?;

    reader.decode().map_err(|e| {
        BackendError::ProcessingFailed(format!("failed to decode {}: {e}", path.display()))
    })
}

fn supported_format(format: ImageFormat) -> Result<Format, BackendError> {
    match format {
        ImageFormat::Jpeg => Ok(Format::Jpeg),
        ImageFormat::Png => Ok(Format::Png),
        ImageFormat::Gif => Ok(Format::Gif),
        other => Err(BackendError::UnsupportedFormat(
            format!("{other:?}").to_lowercase(),
        )),
    }
}

/// Resample the source onto a background-filled canvas per the plan.
///
/// The canvas is opaque; a source with alpha blends over the background
/// during the overlay.
fn composite(img: &DynamicImage, params: &ResizeParams) -> RgbaImage {
    let plan = &params.plan;
    let scaled = image::imageops::resize(
        img,
        plan.scaled.width,
        plan.scaled.height,
        FilterType::Lanczos3,
    );

    let Rgb { r, g, b } = params.background;
    let mut canvas = RgbaImage::from_pixel(
        plan.canvas.width,
        plan.canvas.height,
        Rgba([r, g, b, 255]),
    );
    image::imageops::overlay(
        &mut canvas,
        &scaled,
        i64::from(plan.offset_x),
        i64::from(plan.offset_y),
    );

    canvas
}

/// Map the 1-10 quality scale to JPEG's 0-100.
fn jpeg_quality(quality: Quality) -> u8 {
    quality.value() * 10
}

/// Map the 1-10 quality scale to a PNG compression tier.
///
/// The scale corresponds to zlib levels 0-9 (quality minus one), bucketed
/// into the tiers the encoder exposes.
fn png_compression(quality: Quality) -> png::CompressionType {
    match quality.value() - 1 {
        0..=2 => png::CompressionType::Fast,
        3..=6 => png::CompressionType::Default,
        _ => png::CompressionType::Best,
    }
}

fn encode(
    canvas: &RgbaImage,
    format: Format,
    quality: Quality,
    writer: &mut dyn Write,
) -> Result<(), BackendError> {
    match format {
        Format::Jpeg => {
            // JPEG has no alpha channel; flatten before encoding.
            let rgb = DynamicImage::from(canvas.clone()).into_rgb8();
            let encoder = JpegEncoder::new_with_quality(writer, jpeg_quality(quality));
            rgb.write_with_encoder(encoder)
                .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {e}")))
        }
        Format::Png => {
            let encoder = PngEncoder::new_with_quality(
                writer,
                png_compression(quality),
                png::FilterType::Adaptive,
            );
            canvas
                .write_with_encoder(encoder)
                .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {e}")))
        }
        Format::Gif => GifEncoder::new(writer)
            .encode(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| BackendError::ProcessingFailed(format!("GIF encode failed: {e}"))),
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| match e {
            image::ImageError::IoError(e) => BackendError::Io(e),
            other => BackendError::ProcessingFailed(format!(
                "failed to read dimensions of {}: {other}",
                path.display()
            )),
        })?;
        Ok(Dimensions { width, height })
    }

    fn top_left_pixel(&self, path: &Path) -> Result<Rgb, BackendError> {
        let img = load_image(path)?;
        let Rgba([r, g, b, _]) = img.get_pixel(0, 0);
        Ok(Rgb::new(r, g, b))
    }

    fn resize(&self, params: &ResizeParams, output: &Path) -> Result<(), BackendError> {
        let file = std::fs::File::create(output)?;
        let mut writer = BufWriter::new(file);
        self.resize_to(params, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn resize_to(&self, params: &ResizeParams, writer: &mut dyn Write) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let canvas = composite(&img, params);
        encode(&canvas, params.format, params.quality, writer)
    }
}
