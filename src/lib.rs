//! Library exports for the quickshot capture subsystem.
//!
//! Exposes the capture session and its dependency seams so integration
//! tests and external tools can drive captures with fake screens instead of
//! real display hardware.

pub mod capture;

pub use capture::{CaptureError, CaptureSession, SessionOptions};
