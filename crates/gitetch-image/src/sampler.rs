// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Raster decoding and active-pixel extraction
//!
//! An image column maps to a week on the contribution graph and a row to a
//! day of week, so the grid bounds are hard preconditions: at most 51
//! columns and 7 rows. A pixel is "active" (will become a commit) iff it is
//! pure black and sufficiently opaque; everything else is ignored.

use crate::error::ImageError;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Maximum image width in pixels (weeks shown by the contribution graph)
pub const MAX_GRID_WIDTH: u32 = 51;

/// Maximum image height in pixels (days per week column)
pub const MAX_GRID_HEIGHT: u32 = 7;

/// Default alpha cutoff: a black pixel is active only when alpha is strictly greater
pub const ALPHA_THRESHOLD: u8 = 128;

/// An image coordinate selected for a commit
///
/// Origin is top-left; `x` is the column (week offset from the anchor) and
/// `y` is the row (day-of-week offset, 0 = Sunday).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pixel {
    /// Column index (week offset)
    pub x: u32,
    /// Row index (day-of-week offset)
    pub y: u32,
}

impl Pixel {
    /// Create a pixel coordinate
    #[must_use]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Whether a pixel draws on the graph: pure black, alpha strictly above the threshold
#[must_use]
pub fn is_active(pixel: Rgba<u8>, alpha_threshold: u8) -> bool {
    let Rgba([r, g, b, a]) = pixel;
    r == 0 && g == 0 && b == 0 && a > alpha_threshold
}

/// Extract the active coordinates from an already-decoded RGBA buffer
///
/// Iteration follows the buffer (row-major); callers that need a particular
/// order sort explicitly.
#[must_use]
pub fn active_pixels(rgba: &RgbaImage, alpha_threshold: u8) -> Vec<Pixel> {
    rgba.enumerate_pixels()
        .filter(|(_, _, px)| is_active(**px, alpha_threshold))
        .map(|(x, y, _)| Pixel::new(x, y))
        .collect()
}

/// Decode the image at `path` and return its active pixel coordinates
///
/// The decoded image is normalized to RGBA before sampling.
///
/// # Errors
///
/// - `ImageError::NotFound` if the path cannot be opened
/// - `ImageError::Decode` if the bytes are not a decodable raster
/// - `ImageError::DimensionExceeded` if the image is taller than `max_height`
///   or wider than `max_width`
pub fn load_active_pixels(
    path: impl AsRef<Path>,
    max_width: u32,
    max_height: u32,
    alpha_threshold: u8,
) -> Result<Vec<Pixel>, ImageError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
            ImageError::NotFound {
                path: path.display().to_string(),
            }
        }
        source => ImageError::Decode {
            path: path.display().to_string(),
            source,
        },
    })?;

    let rgba = img.to_rgba8();
    if rgba.height() > max_height {
        return Err(ImageError::DimensionExceeded {
            axis: "height",
            actual: rgba.height(),
            max: max_height,
        });
    }
    if rgba.width() > max_width {
        return Err(ImageError::DimensionExceeded {
            axis: "width",
            actual: rgba.width(),
            max: max_width,
        });
    }
    let pixels = active_pixels(&rgba, alpha_threshold);
    debug!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        active = pixels.len(),
        "sampled image"
    );
    Ok(pixels)
}
