//! Output path resolution for screenshots.
//!
//! Bare filenames are placed under a default output directory; the optional
//! timestamp and the interval sequence number are inserted between the file
//! stem and its extension.

use super::types::CaptureError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory that bare output filenames are placed under.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Extension used when the requested output name has none.
const DEFAULT_FORMAT: &str = "png";

/// Resolve the final output path for a capture session.
///
/// # Arguments
/// * `output` - Requested output file name or path
/// * `add_timestamp` - Whether to suffix the stem with `_%Y%m%d_%H%M%S`
/// * `now` - Time the timestamp is taken from
///
/// # Returns
/// The resolved path: timestamp applied, extension defaulted to `png`, and
/// bare filenames moved under [`DEFAULT_OUTPUT_DIR`].
pub fn resolve_output_path(output: &str, add_timestamp: bool, now: DateTime<Local>) -> PathBuf {
    let requested = Path::new(output);
    let stem = requested
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "screenshot".to_string());
    let extension = requested
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    let file_name = if add_timestamp {
        format!("{}_{}.{}", stem, now.format("%Y%m%d_%H%M%S"), extension)
    } else {
        format!("{}.{}", stem, extension)
    };

    match requested.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => Path::new(DEFAULT_OUTPUT_DIR).join(file_name),
    }
}

/// Per-shot filename for interval capture: `<stem>_<index %04d>.<ext>` in the
/// same parent directory as `output`.
pub fn interval_path(output: &Path, index: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "screenshot".to_string());
    let extension = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    output.with_file_name(format!("{stem}_{index:04}.{extension}"))
}

/// Ensure the parent directory of `path` exists, creating it if necessary.
pub fn ensure_parent_exists(path: &Path) -> Result<(), CaptureError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::info!("Creating output directory: {}", parent.display());
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap()
    }

    #[test]
    fn bare_filename_lands_in_output_dir() {
        let path = resolve_output_path("shot.png", false, fixed_now());
        assert_eq!(path, Path::new("output").join("shot.png"));
    }

    #[test]
    fn explicit_parent_is_kept() {
        let path = resolve_output_path("captures/shot.png", false, fixed_now());
        assert_eq!(path, Path::new("captures").join("shot.png"));
    }

    #[test]
    fn resolution_is_idempotent_without_timestamp() {
        let first = resolve_output_path("shot.png", false, fixed_now());
        let second = resolve_output_path("shot.png", false, Local::now());
        assert_eq!(first, second);
    }

    #[test]
    fn timestamp_is_inserted_before_extension() {
        let path = resolve_output_path("shot.png", true, fixed_now());
        assert_eq!(path, Path::new("output").join("shot_20240301_090507.png"));
    }

    #[test]
    fn timestamps_differ_across_seconds() {
        let later = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 8).unwrap();
        let first = resolve_output_path("shot.png", true, fixed_now());
        let second = resolve_output_path("shot.png", true, later);
        assert_ne!(first, second);
    }

    #[test]
    fn missing_extension_defaults_to_png() {
        let path = resolve_output_path("shot", false, fixed_now());
        assert_eq!(path, Path::new("output").join("shot.png"));
    }

    #[test]
    fn interval_path_inserts_zero_padded_index() {
        let base = Path::new("output").join("shot.png");
        assert_eq!(
            interval_path(&base, 3),
            Path::new("output").join("shot_0003.png")
        );
        assert_eq!(
            interval_path(&base, 12),
            Path::new("output").join("shot_0012.png")
        );
    }

    #[test]
    fn ensure_parent_creates_missing_directories() {
        let temp = tempfile::TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("shot.png");
        ensure_parent_exists(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
    }
}
