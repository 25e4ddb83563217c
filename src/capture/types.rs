//! Data types for screenshot capture functionality.

use thiserror::Error;

/// Rectangular pixel area of the display, top-left inclusive,
/// bottom-right exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Builds a region from corner coordinates `(x1, y1)` / `(x2, y2)`.
    ///
    /// All coordinates must be non-negative, with `x1 < x2` and `y1 < y2`.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, CaptureError> {
        if [x1, y1, x2, y2].iter().any(|coord| *coord < 0) {
            return Err(CaptureError::InvalidArgument(
                "Coordinates must be non-negative".to_string(),
            ));
        }
        if x1 >= x2 {
            return Err(CaptureError::InvalidArgument(format!(
                "x1 ({x1}) must be less than x2 ({x2})"
            )));
        }
        if y1 >= y2 {
            return Err(CaptureError::InvalidArgument(format!(
                "y1 ({y1}) must be less than y2 ({y2})"
            )));
        }

        Ok(Self {
            x: x1 as u32,
            y: y1 as u32,
            width: (x2 - x1) as u32,
            height: (y2 - y1) as u32,
        })
    }
}

/// Errors that can occur while constructing a session or capturing.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Screen capture is not supported here: {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to save screenshot: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Failed to encode screenshot: {0}")]
    EncodeError(#[from] image::ImageError),

    #[error("Screen capture failed: {0}")]
    CaptureFailed(String),
}
