//! The capture session: validated settings plus the three capture
//! operations (full screen, region, interval).

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;

use super::dependencies::CaptureDependencies;
use super::file;
use super::types::{CaptureError, Region};

/// Caller-supplied settings for a capture session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Output file name. Bare names are placed under the default output
    /// directory; a missing extension defaults to `png`.
    pub output: String,
    /// Seconds to wait before each capture operation. Must be non-negative.
    pub delay: i64,
    /// Suffix the file stem with a timestamp taken at construction time.
    pub timestamp: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            output: "screenshot.png".to_string(),
            delay: 3,
            timestamp: false,
        }
    }
}

/// A validated capture session. Immutable after construction; the output
/// path is resolved once and its parent directory is guaranteed to exist.
pub struct CaptureSession {
    output_path: PathBuf,
    delay: Duration,
    dependencies: CaptureDependencies,
}

impl CaptureSession {
    /// Create a session backed by the real screen and filesystem.
    pub fn new(options: SessionOptions) -> Result<Self, CaptureError> {
        Self::with_dependencies(options, CaptureDependencies::default())
    }

    /// Create a session with custom dependencies (useful for testing).
    ///
    /// Checks run in a fixed order: the delay is validated first, then the
    /// platform probe, then the output path is resolved and its parent
    /// directory created. No capture happens here.
    pub fn with_dependencies(
        options: SessionOptions,
        dependencies: CaptureDependencies,
    ) -> Result<Self, CaptureError> {
        if options.delay < 0 {
            return Err(CaptureError::InvalidArgument(format!(
                "Delay must be non-negative, got {}",
                options.delay
            )));
        }

        dependencies.probe.check()?;

        let output_path =
            file::resolve_output_path(&options.output, options.timestamp, Local::now());
        file::ensure_parent_exists(&output_path)?;

        Ok(Self {
            output_path,
            delay: Duration::from_secs(options.delay as u64),
            dependencies,
        })
    }

    /// The resolved path the (first) screenshot will be written to.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Capture the entire screen after the configured delay.
    ///
    /// Returns the path the screenshot was saved to.
    pub fn capture_screen(&self) -> Result<PathBuf, CaptureError> {
        log::info!(
            "Waiting {} seconds before capturing the full screen",
            self.delay.as_secs()
        );
        thread::sleep(self.delay);

        let frame = self.dependencies.source.grab_full()?;
        self.dependencies.sink.save(&frame, &self.output_path)?;

        log::info!(
            "Full-screen screenshot saved as {}",
            self.output_path.display()
        );
        Ok(self.output_path.clone())
    }

    /// Capture the rectangle with top-left `(x1, y1)` and bottom-right
    /// `(x2, y2)` after the configured delay.
    ///
    /// The rectangle is `[x1, x2) x [y1, y2)` in pixel coordinates.
    /// Coordinate validation happens before the delay, so a bad region
    /// never sleeps or touches the screen.
    pub fn capture_area(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<PathBuf, CaptureError> {
        let region = Region::from_corners(x1, y1, x2, y2)?;

        log::info!(
            "Waiting {} seconds before capturing the selected area",
            self.delay.as_secs()
        );
        thread::sleep(self.delay);

        let frame = self.dependencies.source.grab_region(region)?;
        self.dependencies.sink.save(&frame, &self.output_path)?;

        log::info!(
            "Selected area screenshot saved as {}",
            self.output_path.display()
        );
        Ok(self.output_path.clone())
    }

    /// Capture the full screen every `interval` seconds until `time_limit`
    /// seconds have elapsed.
    ///
    /// Each shot goes to a sequence-numbered variant of the output path
    /// (`shot_0001.png`, `shot_0002.png`, ...). At least one shot is taken;
    /// the first failure aborts the run, leaving earlier files in place.
    ///
    /// Returns the number of screenshots saved.
    pub fn capture_interval(&self, interval: f64, time_limit: f64) -> Result<usize, CaptureError> {
        if interval.is_nan() || interval <= 0.0 {
            return Err(CaptureError::InvalidArgument(format!(
                "Interval must be positive, got {interval}"
            )));
        }
        if time_limit.is_nan() || time_limit <= 0.0 {
            return Err(CaptureError::InvalidArgument(format!(
                "Time limit must be positive, got {time_limit}"
            )));
        }

        log::info!(
            "Waiting {} seconds before starting interval capture",
            self.delay.as_secs()
        );
        thread::sleep(self.delay);

        log::info!("Starting interval capture: {interval}s interval, {time_limit}s duration");
        let started = Instant::now();
        let mut count = 0usize;

        while started.elapsed().as_secs_f64() < time_limit {
            count += 1;
            let shot_path = file::interval_path(&self.output_path, count);

            let frame = self.dependencies.source.grab_full()?;
            self.dependencies.sink.save(&frame, &shot_path)?;

            log::info!(
                "Screenshot #{} saved as {} (elapsed: {:.1}s)",
                count,
                shot_path.display(),
                started.elapsed().as_secs_f64()
            );

            // Never sleep past the time limit.
            let remaining = time_limit - started.elapsed().as_secs_f64();
            if remaining > 0.0 {
                thread::sleep(Duration::from_secs_f64(interval.min(remaining)));
            } else {
                break;
            }
        }

        log::info!("Interval capture completed: {count} screenshots saved");
        Ok(count)
    }
}
