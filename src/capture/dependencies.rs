use std::{path::Path, sync::Arc};

use image::RgbaImage;

use crate::capture::{
    platform::DesktopProbe,
    source::{ImageFileSink, XcapScreenSource},
    types::{CaptureError, Region},
};

/// Abstraction over how pixels are grabbed from the display.
pub trait ScreenSource: Send + Sync {
    fn grab_full(&self) -> Result<RgbaImage, CaptureError>;
    fn grab_region(&self, region: Region) -> Result<RgbaImage, CaptureError>;
}

/// Abstraction over encoding and writing a captured image to disk.
pub trait ImageSink: Send + Sync {
    fn save(&self, image: &RgbaImage, path: &Path) -> Result<(), CaptureError>;
}

/// Abstraction over the platform capability check run at session construction.
pub trait DisplayProbe: Send + Sync {
    fn check(&self) -> Result<(), CaptureError>;
}

/// Bundle of dependencies used by a capture session. Each component can be
/// mocked in tests.
#[derive(Clone)]
pub struct CaptureDependencies {
    pub source: Arc<dyn ScreenSource>,
    pub sink: Arc<dyn ImageSink>,
    pub probe: Arc<dyn DisplayProbe>,
}

impl Default for CaptureDependencies {
    fn default() -> Self {
        Self {
            source: Arc::new(XcapScreenSource),
            sink: Arc::new(ImageFileSink),
            probe: Arc::new(DesktopProbe),
        }
    }
}
