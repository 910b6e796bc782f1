//! Image manipulation foundation shared by all three pipelines — pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Autocrop** | corner-mean background estimate + bounding-box crop |
//! | **Alpha flatten** | `imageops::overlay` onto opaque white |
//! | **Canvas** | white square, 4% margin, Lanczos3 downsample |
//! | **Encode** | JPEG only, via `JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: pure functions for geometry math (unit testable)
//! - **Autocrop**: background estimation and content-mask cropping
//! - **Canvas**: alpha flattening, canvas composition, image I/O

pub mod autocrop;
pub mod calculations;
pub mod canvas;

pub use autocrop::{DEFAULT_THRESHOLD, autocrop};
pub use canvas::{
    CANVAS_MARGIN, DEFAULT_MAX_SIDE, ImagingError, compose_canvas, flatten_to_rgb, load_image,
    save_jpeg,
};
