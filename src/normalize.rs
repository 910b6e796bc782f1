//! The normalization pipeline — the core of packshot.
//!
//! Per file: load, flatten any alpha onto white, autocrop the backdrop,
//! center on a square white canvas with a 4% margin, downsample if the
//! canvas exceeds the size bound, and overwrite the original file re-encoded
//! as JPEG. The batch driver isolates failures per item and reports 1-based
//! progress after every item.

use crate::imaging::{self, ImagingError, autocrop, compose_canvas, flatten_to_rgb};
use crate::report::BatchReport;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Knobs for the normalization pipeline. Defaults match the catalog house
/// style: 1500 px bound, threshold 10.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Longest allowed canvas side; larger canvases are downsampled.
    pub max_side: u32,
    /// Background color-distance threshold for the autocrop.
    pub threshold: f32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_side: imaging::DEFAULT_MAX_SIDE,
            threshold: imaging::DEFAULT_THRESHOLD,
        }
    }
}

/// Run the full per-file pipeline and return the normalized image.
///
/// Reads the path once and never writes — the batch driver owns the
/// overwrite. Callers relying on an unmodified original must copy
/// beforehand.
pub fn normalize(path: &Path, opts: &NormalizeOptions) -> Result<RgbImage, ImagingError> {
    let img = imaging::load_image(path)?;
    let flat = flatten_to_rgb(img);
    let cropped = autocrop(&flat, opts.threshold);
    Ok(compose_canvas(&cropped, opts.max_side))
}

fn normalize_in_place(path: &Path, opts: &NormalizeOptions) -> Result<(), ImagingError> {
    let normalized = normalize(path, opts)?;
    imaging::save_jpeg(&normalized, path)
}

/// Normalize every path in order, overwriting each file in place as JPEG
/// (the extension is left alone, only the content changes).
///
/// A single bad input never aborts the batch: the failure is recorded and
/// the driver moves on. `on_progress(done, total)` fires after every item,
/// success or failure, with a 1-based completed count.
pub fn batch_normalize(
    paths: &[PathBuf],
    opts: &NormalizeOptions,
    mut on_progress: impl FnMut(usize, usize),
) -> BatchReport {
    let total = paths.len();
    let mut report = BatchReport::new(total);

    for (i, path) in paths.iter().enumerate() {
        match normalize_in_place(path, opts) {
            Ok(()) => report.record_success(),
            Err(e) => report.record_failure(path.display().to_string(), e.to_string()),
        }
        on_progress(i + 1, total);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::calculations::percent_complete;
    use image::{Rgb, RgbImage};
    use std::path::Path;
    use tempfile::TempDir;

    /// Write a PNG (lossless, so pixel assertions stay exact).
    fn write_png(path: &Path, img: &RgbImage) {
        img.save_with_format(path, image::ImageFormat::Png).unwrap();
    }

    /// 100×50 white backdrop with a 60×30 red block at (20, 10).
    fn scenario_image() -> RgbImage {
        RgbImage::from_fn(100, 50, |x, y| {
            if (20..80).contains(&x) && (10..40).contains(&y) {
                Rgb([255, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    #[test]
    fn end_to_end_red_block_scenario() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("product.png");
        write_png(&path, &scenario_image());

        let out = normalize(&path, &NormalizeOptions::default()).unwrap();

        // Crop box (20,10,80,40) → 60×30 content → canvas ceil(60*1.04) = 63
        assert_eq!(out.dimensions(), (63, 63));

        // Content centered with 1–2 px margins: red spans x 1..=60, y 16..=45
        assert_eq!(*out.get_pixel(1, 16), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(60, 45), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(0, 16), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(61, 45), Rgb([255, 255, 255]));
    }

    #[test]
    fn normalize_is_square_for_any_input() {
        let tmp = TempDir::new().unwrap();
        for (i, (w, h)) in [(100u32, 50u32), (33, 97), (10, 10)].iter().enumerate() {
            let path = tmp.path().join(format!("img{i}.png"));
            write_png(&path, &RgbImage::from_pixel(*w, *h, Rgb([40, 80, 120])));

            let out = normalize(&path, &NormalizeOptions::default()).unwrap();
            assert_eq!(out.width(), out.height(), "input {w}x{h}");
        }
    }

    #[test]
    fn normalize_alpha_input_flattens_to_white_canvas() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("transparent.png");

        // Fully transparent border around an opaque green square
        let img = image::RgbaImage::from_fn(40, 40, |x, y| {
            if (10..30).contains(&x) && (10..30).contains(&y) {
                image::Rgba([0, 200, 0, 255])
            } else {
                image::Rgba([0, 0, 0, 0])
            }
        });
        img.save_with_format(&path, image::ImageFormat::Png).unwrap();

        let out = normalize(&path, &NormalizeOptions::default()).unwrap();
        // Transparent border flattens to white and is cropped away: 20×20
        // content → canvas ceil(20*1.04) = 21
        assert_eq!(out.dimensions(), (21, 21));
        assert_eq!(*out.get_pixel(10, 10), Rgb([0, 200, 0]));
    }

    #[test]
    fn normalize_respects_max_side() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.png");
        write_png(&path, &RgbImage::from_pixel(400, 200, Rgb([5, 5, 5])));

        let out = normalize(
            &path,
            &NormalizeOptions {
                max_side: 100,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(out.dimensions(), (100, 100));
    }

    #[test]
    fn batch_overwrites_files_as_jpeg() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("item.png");
        write_png(&path, &scenario_image());

        let report = batch_normalize(
            &[path.clone()],
            &NormalizeOptions::default(),
            |_, _| {},
        );
        assert_eq!(report.succeeded, 1);

        // Extension unchanged, content now JPEG, still square
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8], "expected JPEG magic");
        let reloaded = imaging::load_image(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (63, 63));
    }

    #[test]
    fn batch_isolates_per_item_failures() {
        let tmp = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for i in 0..5 {
            let path = tmp.path().join(format!("item{i}.png"));
            if i == 2 {
                std::fs::write(&path, b"definitely not an image").unwrap();
            } else {
                write_png(&path, &scenario_image());
            }
            paths.push(path);
        }

        let mut calls = Vec::new();
        let report = batch_normalize(&paths, &NormalizeOptions::default(), |done, total| {
            calls.push((done, total))
        });

        assert_eq!(report.total, 5);
        assert_eq!(report.succeeded, 4);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].label.ends_with("item2.png"));

        // Exactly one progress call per item, monotone percent ending at 100
        assert_eq!(calls.len(), 5);
        let percents: Vec<u32> = calls
            .iter()
            .map(|&(done, total)| percent_complete(done, total))
            .collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*percents.last().unwrap(), 100);
    }

    #[test]
    fn empty_batch_reports_nothing() {
        let mut called = false;
        let report = batch_normalize(&[], &NormalizeOptions::default(), |_, _| called = true);
        assert_eq!(report.total, 0);
        assert!(report.is_clean());
        assert!(!called);
    }
}
