//! Platform capability check for screen capture.

use std::env;

use super::dependencies::DisplayProbe;
use super::types::CaptureError;

/// Default probe: accepts the desktop operating systems the capture backend
/// supports, and on Linux additionally requires a running display server.
pub struct DesktopProbe;

impl DisplayProbe for DesktopProbe {
    fn check(&self) -> Result<(), CaptureError> {
        if cfg!(target_os = "windows") || cfg!(target_os = "macos") {
            return Ok(());
        }

        if cfg!(target_os = "linux") {
            if env::var_os("WAYLAND_DISPLAY").is_some() || env::var_os("DISPLAY").is_some() {
                return Ok(());
            }
            return Err(CaptureError::UnsupportedPlatform(
                "no Wayland or X11 display available (WAYLAND_DISPLAY and DISPLAY are unset)"
                    .to_string(),
            ));
        }

        Err(CaptureError::UnsupportedPlatform(format!(
            "unsupported operating system '{}'",
            env::consts::OS
        )))
    }
}
