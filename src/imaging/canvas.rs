//! Canvas composition, alpha flattening, and image I/O.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image` crate, format sniffed from content |
//! | Alpha flatten | `image::imageops::overlay` onto opaque white |
//! | Downsample | `image::imageops::resize` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::calculations::{canvas_side, center_offsets};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{
    DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, Rgb, RgbImage, Rgba, RgbaImage,
    imageops,
};
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Proportional canvas margin: 4% around the content's longer dimension.
pub const CANVAS_MARGIN: f64 = 1.04;

/// Default longest allowed canvas side before downsampling kicks in.
pub const DEFAULT_MAX_SIDE: u32 = 1500;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file content, not the extension — the
/// normalizer overwrites files as JPEG while keeping their original name, so
/// extensions cannot be trusted.
pub fn load_image(path: &Path) -> Result<DynamicImage, ImagingError> {
    ImageReader::open(path)
        .map_err(ImagingError::Io)?
        .with_guessed_format()
        .map_err(ImagingError::Io)?
        .decode()
        .map_err(|e| ImagingError::Decode(format!("{}: {}", path.display(), e)))
}

/// Encode and save as JPEG, regardless of the path's extension.
pub fn save_jpeg(img: &RgbImage, path: &Path) -> Result<(), ImagingError> {
    let file = std::fs::File::create(path).map_err(ImagingError::Io)?;
    let writer = BufWriter::new(file);
    JpegEncoder::new(writer)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .map_err(|e| ImagingError::Encode(format!("{}: {}", path.display(), e)))
}

/// Flatten an image to RGB.
///
/// Images with an alpha channel are alpha-composited onto an opaque white
/// background first — a plain channel drop would turn transparent regions
/// black instead of background-colored.
pub fn flatten_to_rgb(img: DynamicImage) -> RgbImage {
    if img.color().has_alpha() {
        let (w, h) = (img.width(), img.height());
        let mut background = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]));
        imageops::overlay(&mut background, &img.to_rgba8(), 0, 0);
        DynamicImage::ImageRgba8(background).to_rgb8()
    } else {
        img.to_rgb8()
    }
}

/// Center cropped content on a white square canvas with a 4% margin, then
/// downsample to `max_side × max_side` (Lanczos) when the canvas exceeds it.
/// Never upsamples.
pub fn compose_canvas(content: &RgbImage, max_side: u32) -> RgbImage {
    let side = canvas_side(content.dimensions(), CANVAS_MARGIN);
    let mut canvas = RgbImage::from_pixel(side, side, Rgb([255, 255, 255]));

    let (dx, dy) = center_offsets(side, content.dimensions());
    imageops::overlay(&mut canvas, content, dx as i64, dy as i64);

    if side > max_side {
        imageops::resize(&canvas, max_side, max_side, FilterType::Lanczos3)
    } else {
        canvas
    }
}
