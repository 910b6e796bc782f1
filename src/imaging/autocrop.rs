//! Content-aware background trimming.
//!
//! Product photos are assumed shot on a uniform backdrop that touches all
//! four corners. The background color is estimated as the mean of the corner
//! pixels; every pixel whose summed per-channel distance from that estimate
//! exceeds a threshold counts as content, and the image is cropped to the
//! tightest rectangle around the content.

use image::{Rgb, RgbImage, imageops};

/// Default background color-distance threshold (sum of absolute per-channel
/// differences).
pub const DEFAULT_THRESHOLD: f32 = 10.0;

/// Estimate the backdrop color as the per-channel mean of the four corner
/// pixels. Averaging tolerates minor corner noise and anti-aliasing without
/// sampling the whole border.
pub(crate) fn estimate_background(img: &RgbImage) -> [f32; 3] {
    let (w, h) = img.dimensions();
    let corners = [
        img.get_pixel(0, 0),
        img.get_pixel(w - 1, 0),
        img.get_pixel(0, h - 1),
        img.get_pixel(w - 1, h - 1),
    ];

    let mut mean = [0.0f32; 3];
    for px in corners {
        for (acc, channel) in mean.iter_mut().zip(px.0) {
            *acc += channel as f32;
        }
    }
    mean.map(|sum| sum / 4.0)
}

/// Summed absolute per-channel distance between a pixel and the background
/// estimate.
fn color_distance(px: &Rgb<u8>, background: &[f32; 3]) -> f32 {
    px.0.iter()
        .zip(background)
        .map(|(&channel, &bg)| (channel as f32 - bg).abs())
        .sum()
}

/// Find the tightest rectangle `(x0, y0, x1, y1)` enclosing every pixel
/// further than `threshold` from the background estimate. Upper bounds are
/// exclusive. Returns `None` when no pixel qualifies (the image is judged
/// background-only).
pub(crate) fn content_bounds(img: &RgbImage, threshold: f32) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return None;
    }

    let background = estimate_background(img);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if color_distance(px, &background) > threshold {
            bounds = Some(match bounds {
                None => (x, y, x + 1, y + 1),
                Some((x0, y0, x1, y1)) => {
                    (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1))
                }
            });
        }
    }
    bounds
}

/// Trim an image to the minimal rectangle containing all pixels sufficiently
/// different from the estimated backdrop.
///
/// A background-only image is returned unmodified — a fully blank photo must
/// not raise a failure or collapse to empty dimensions.
pub fn autocrop(img: &RgbImage, threshold: f32) -> RgbImage {
    match content_bounds(img, threshold) {
        Some((x0, y0, x1, y1)) => imageops::crop_imm(img, x0, y0, x1 - x0, y1 - y0).to_image(),
        None => img.clone(),
    }
}
