//! Screenshot capture functionality for quickshot.
//!
//! This module provides:
//! - Full screen capture after a configurable delay
//! - Region capture with validated pixel coordinates
//! - Interval capture with sequence-numbered filenames
//! - Output path resolution with optional timestamps

pub mod file;
pub mod types;

mod dependencies;
mod platform;
mod session;
mod source;

pub use dependencies::{CaptureDependencies, DisplayProbe, ImageSink, ScreenSource};
pub use session::{CaptureSession, SessionOptions};
pub use types::{CaptureError, Region};
