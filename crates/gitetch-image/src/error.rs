// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gitetch-image

use thiserror::Error;

/// Errors that can occur while loading and sampling an image
#[derive(Debug, Error)]
pub enum ImageError {
    /// The image file could not be opened
    #[error("Image file not found: {path}")]
    NotFound {
        /// The path that could not be opened
        path: String,
    },

    /// The file's bytes are not a decodable raster image
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        /// The path of the undecodable file
        path: String,
        /// The underlying decoder failure
        source: image::ImageError,
    },

    /// The image is larger than the grid allows
    #[error("Image {axis} ({actual}px) exceeds the maximum of {max}px")]
    DimensionExceeded {
        /// Which axis violated the bound ("height" or "width")
        axis: &'static str,
        /// The decoded size along that axis
        actual: u32,
        /// The configured maximum for that axis
        max: u32,
    },
}
