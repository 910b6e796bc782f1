//! # Packshot
//!
//! Batch product-photo tooling for an e-commerce catalog. Three independent
//! pipelines share one image-manipulation foundation:
//!
//! ```text
//! 1. Normalize   photos     → square, padded, background-trimmed JPEGs (in place)
//! 2. Tag         photos     → copies with a promotional sticker on a 3×3 grid cell
//! 3. Fetch       CSV rows   → downloaded reference images, one per identifier
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Pure-Rust image foundation: autocrop, alpha flattening, canvas composition, JPEG I/O |
//! | [`normalize`] | Core pipeline — per-file normalization and the in-place batch driver |
//! | [`tag`] | Sticker catalog, 3×3 grid placement, alpha compositing |
//! | [`fetch`] | CSV-driven sequential downloads with per-row failure tracking |
//! | [`report`] | Per-item success/failure aggregation returned by every batch |
//! | [`output`] | CLI output formatting — pure `format_*` functions + print wrappers |
//!
//! # Design Decisions
//!
//! ## Sequential By Design
//!
//! Every batch is single-threaded and processes items in order. Each file is
//! opened, processed, and closed before the next; no batch holds more than
//! one image and one sticker open at a time. Responsiveness comes from
//! incremental progress reporting, not from parallelism — these batches run
//! to completion and do not support mid-run cancellation.
//!
//! ## Fault Isolation Per Item
//!
//! No error propagates out of a single-item step to abort a batch. Each item
//! produces a success or a recorded [`report::ItemFailure`], and the driver
//! guarantees it attempts every remaining item. Only setup errors — a
//! missing destination folder, an unresolvable sticker name, an unreadable
//! CSV — are fatal, and only before any item has been touched.
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work goes through the `image` crate: Lanczos3 resampling,
//! alpha compositing via `imageops::overlay`, and JPEG encoding. No
//! ImageMagick, no system dependencies; the binary is self-contained.
//!
//! ## Explicit Job Parameters
//!
//! User selections (files, destination, sticker, cell) travel as immutable
//! values — [`tag::TagJob`], [`normalize::NormalizeOptions`] — passed into
//! each pipeline call, never as shared mutable state.

pub mod fetch;
pub mod imaging;
pub mod normalize;
pub mod output;
pub mod report;
pub mod tag;
