//! Promotional tag compositing.
//!
//! A sticker (badge) from a fixed catalog is resized to one third of the
//! base photo and alpha-composited onto one cell of a 3×3 grid. The result
//! is saved next to a chosen destination as `<stem>_TAG.jpg`; the original
//! file is never touched.

use crate::imaging::{self, ImagingError, calculations};
use crate::report::BatchReport;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// The fixed badge catalog: multipack counts, dietary/origin labels, and
/// weight labels. Each name resolves to `<assets>/<name>.png`.
pub const STICKER_NAMES: &[&str] = &[
    "2x-pack",
    "3x-pack",
    "4x-pack",
    "5x-pack",
    "6x-pack",
    "7x-pack",
    "8x-pack",
    "9x-pack",
    "10x-pack",
    "12x-pack",
    "18x-pack",
    "24x-pack",
    "bio",
    "chilled",
    "frozen",
    "gluten-free",
    "lactose-free",
    "low-price",
    "from-the-farm",
    "pet",
    "protein",
    "vegan",
    "new",
    "only-here",
    "multipack",
    "1kg",
    "500g",
];

#[derive(Error, Debug)]
pub enum TagError {
    #[error("sticker not found: {0}")]
    StickerNotFound(PathBuf),
    #[error("destination folder not found: {0}")]
    DestinationMissing(PathBuf),
    #[error("base image too small for a 3x3 grid: {0}x{1}")]
    BaseTooSmall(u32, u32),
    #[error(transparent)]
    Imaging(#[from] ImagingError),
}

/// A cell of the 3×3 placement grid, `(row, col)`, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

impl GridCell {
    pub fn new(row: u32, col: u32) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }
}

impl FromStr for GridCell {
    type Err = String;

    /// Parse `"row,col"` with both parts in `0..=2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
        let row: u32 = row.trim().parse().map_err(|_| format!("bad row '{row}'"))?;
        let col: u32 = col.trim().parse().map_err(|_| format!("bad col '{col}'"))?;
        GridCell::new(row, col).ok_or_else(|| format!("cell {row},{col} outside the 3x3 grid"))
    }
}

/// Resolves sticker names against a known asset directory.
#[derive(Debug, Clone)]
pub struct StickerCatalog {
    assets_dir: PathBuf,
}

impl StickerCatalog {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    /// Resolve a sticker name to its asset path. An unresolvable name is an
    /// error reported to the caller, never silently skipped.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, TagError> {
        let file = if name.ends_with(".png") {
            name.to_string()
        } else {
            format!("{name}.png")
        };
        let path = self.assets_dir.join(file);
        if path.is_file() {
            Ok(path)
        } else {
            Err(TagError::StickerNotFound(path))
        }
    }

    /// Every catalog name paired with whether its asset currently resolves.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        STICKER_NAMES
            .iter()
            .map(|&name| (name, self.resolve(name).is_ok()))
            .collect()
    }
}

/// One tagging run: user selections collected by the CLI, passed explicitly
/// instead of living as shared mutable state.
#[derive(Debug, Clone)]
pub struct TagJob {
    pub files: Vec<PathBuf>,
    pub dest: PathBuf,
    pub sticker: String,
    pub cell: GridCell,
}

/// Composite a sticker onto a grid cell of the base image.
///
/// The sticker is resized to exactly one third of the base's width and
/// height (Lanczos). Its own alpha governs the blend; base pixels outside
/// the sticker's footprint are untouched. The result is flattened to RGB.
pub fn composite_tag(
    base_path: &Path,
    sticker_path: &Path,
    cell: GridCell,
) -> Result<RgbImage, TagError> {
    let mut base = imaging::load_image(base_path)?.to_rgba8();
    let (bw, bh) = base.dimensions();

    let (sw, sh) = calculations::sticker_size((bw, bh));
    if sw == 0 || sh == 0 {
        return Err(TagError::BaseTooSmall(bw, bh));
    }

    let sticker = imaging::load_image(sticker_path)?.to_rgba8();
    let sticker = imageops::resize(&sticker, sw, sh, FilterType::Lanczos3);

    let (dx, dy) = calculations::grid_offset((cell.row, cell.col), (bw, bh));
    imageops::overlay(&mut base, &sticker, dx as i64, dy as i64);

    Ok(DynamicImage::ImageRgba8(base).to_rgb8())
}

fn tag_one(path: &Path, sticker_path: &Path, job: &TagJob) -> Result<PathBuf, TagError> {
    let tagged = composite_tag(path, sticker_path, job.cell)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let out = job.dest.join(format!("{stem}_TAG.jpg"));
    imaging::save_jpeg(&tagged, &out)?;
    Ok(out)
}

/// Tag every file in the job, writing `<stem>_TAG.jpg` into the destination.
///
/// Setup errors (unresolvable sticker, missing destination) are fatal before
/// any item is processed. Per-item failures are recorded and skipped; the
/// batch always runs to completion.
pub fn batch_tag(
    job: &TagJob,
    catalog: &StickerCatalog,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<BatchReport, TagError> {
    let sticker_path = catalog.resolve(&job.sticker)?;
    if !job.dest.is_dir() {
        return Err(TagError::DestinationMissing(job.dest.clone()));
    }

    let total = job.files.len();
    let mut report = BatchReport::new(total);

    for (i, path) in job.files.iter().enumerate() {
        match tag_one(path, &sticker_path, job) {
            Ok(_) => report.record_success(),
            Err(e) => report.record_failure(path.display().to_string(), e.to_string()),
        }
        on_progress(i + 1, total);
    }

    Ok(report)
}
