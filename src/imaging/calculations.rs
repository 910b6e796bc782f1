//! Pure calculation functions for canvas and grid geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the square canvas side for a piece of cropped content.
///
/// The side is the longer content dimension scaled by `margin`, rounded up, so
/// the content always gets a little breathing room on the canvas.
///
/// # Examples
/// ```
/// # use packshot::imaging::calculations::canvas_side;
/// // 60x30 content with a 4% margin → ceil(62.4) = 63
/// assert_eq!(canvas_side((60, 30), 1.04), 63);
/// ```
pub fn canvas_side(content: (u32, u32), margin: f64) -> u32 {
    let longer = content.0.max(content.1);
    (longer as f64 * margin).ceil() as u32
}

/// Calculate the paste offsets that center content on a square canvas.
///
/// Floor division: when the leftover space is odd the content sits one pixel
/// closer to the top-left. Callers must pass `side >= w` and `side >= h`.
pub fn center_offsets(side: u32, content: (u32, u32)) -> (u32, u32) {
    let (w, h) = content;
    ((side - w) / 2, (side - h) / 2)
}

/// Calculate the sticker dimensions for a base image: one third of each edge,
/// truncated.
pub fn sticker_size(base: (u32, u32)) -> (u32, u32) {
    (base.0 / 3, base.1 / 3)
}

/// Calculate the pixel offset of a 3×3 grid cell over a base image.
///
/// `cell` is `(row, col)`, both 0-based. The cell edge lengths are truncated
/// first, matching the sticker size, so the sticker always lands inside the
/// base.
///
/// # Examples
/// ```
/// # use packshot::imaging::calculations::grid_offset;
/// // bottom-left cell of a 300x300 image
/// assert_eq!(grid_offset((2, 0), (300, 300)), (0, 200));
/// ```
pub fn grid_offset(cell: (u32, u32), base: (u32, u32)) -> (u32, u32) {
    let (row, col) = cell;
    (col * (base.0 / 3), row * (base.1 / 3))
}

/// Completion percentage for a batch: `floor(done / total * 100)`.
///
/// An empty batch is complete by definition.
pub fn percent_complete(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (done * 100 / total) as u32
}
