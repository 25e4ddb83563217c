//! Default capture backends: `xcap` for grabbing pixels, `image` for
//! encoding them to disk.

use std::path::Path;

use image::{RgbaImage, imageops};
use xcap::Monitor;

use super::dependencies::{ImageSink, ScreenSource};
use super::types::{CaptureError, Region};

/// Grabs the primary monitor through `xcap`. Region grabs crop the full
/// frame, so coordinates are relative to the primary monitor's top-left.
pub struct XcapScreenSource;

impl XcapScreenSource {
    fn primary_frame(&self) -> Result<RgbaImage, CaptureError> {
        let monitors = Monitor::all().map_err(|e| {
            CaptureError::CaptureFailed(format!("failed to enumerate monitors: {e}"))
        })?;

        let monitor = monitors
            .iter()
            .find(|m| m.is_primary().unwrap_or(false))
            .or_else(|| monitors.first())
            .ok_or_else(|| CaptureError::CaptureFailed("no monitors detected".to_string()))?;

        monitor
            .capture_image()
            .map_err(|e| CaptureError::CaptureFailed(format!("failed to grab the screen: {e}")))
    }
}

impl ScreenSource for XcapScreenSource {
    fn grab_full(&self) -> Result<RgbaImage, CaptureError> {
        self.primary_frame()
    }

    fn grab_region(&self, region: Region) -> Result<RgbaImage, CaptureError> {
        let frame = self.primary_frame()?;

        let (frame_width, frame_height) = frame.dimensions();
        if region.x + region.width > frame_width || region.y + region.height > frame_height {
            return Err(CaptureError::CaptureFailed(format!(
                "region {}x{} at ({}, {}) exceeds the display bounds {}x{}",
                region.width, region.height, region.x, region.y, frame_width, frame_height
            )));
        }

        Ok(imageops::crop_imm(&frame, region.x, region.y, region.width, region.height).to_image())
    }
}

/// Writes images with the `image` crate; the format is inferred from the
/// file extension.
pub struct ImageFileSink;

impl ImageSink for ImageFileSink {
    fn save(&self, image: &RgbaImage, path: &Path) -> Result<(), CaptureError> {
        image.save(path)?;
        Ok(())
    }
}
