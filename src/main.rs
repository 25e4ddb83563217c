use std::process::ExitCode;

use clap::{ArgAction, Parser};

use quickshot::capture::{CaptureError, CaptureSession, SessionOptions};

const EXAMPLES: &str = "\
Examples:
  # Full-screen capture with the default 3-second delay
  quickshot

  # Full-screen with a custom output filename and no delay
  quickshot -o my_screenshot.png -d 0

  # Capture a specific region of the screen
  quickshot --x1 100 --y1 100 --x2 500 --y2 500

  # Capture a screenshot every 2 seconds for 10 seconds
  quickshot -i 2 -l 10

  # Add a timestamp to the filename to avoid overwriting
  quickshot -t
";

#[derive(Parser, Debug)]
#[command(name = "quickshot")]
#[command(version, about = "Capture screenshots of the screen with various options")]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Output file name; bare names are saved under the output/ folder
    #[arg(long, short = 'o', value_name = "PATH", default_value = "screenshot.png")]
    output: String,

    /// Seconds to wait before capturing
    #[arg(
        long,
        short = 'd',
        value_name = "SECONDS",
        default_value_t = 3,
        allow_negative_numbers = true
    )]
    delay: i64,

    /// Append a timestamp to the output filename to avoid overwriting
    #[arg(long, short = 't', action = ArgAction::SetTrue)]
    timestamp: bool,

    /// Top-left X coordinate (region capture)
    #[arg(long, value_name = "PX")]
    x1: Option<i32>,

    /// Top-left Y coordinate (region capture)
    #[arg(long, value_name = "PX")]
    y1: Option<i32>,

    /// Bottom-right X coordinate (region capture)
    #[arg(long, value_name = "PX")]
    x2: Option<i32>,

    /// Bottom-right Y coordinate (region capture)
    #[arg(long, value_name = "PX")]
    y2: Option<i32>,

    /// Seconds between screenshots (interval capture)
    #[arg(long, short = 'i', value_name = "SECONDS")]
    interval: Option<f64>,

    /// Total duration in seconds of interval capture
    #[arg(long, short = 'l', value_name = "SECONDS")]
    time_limit: Option<f64>,
}

/// Which capture operation the supplied flags select.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CaptureMode {
    FullScreen,
    Region { x1: i32, y1: i32, x2: i32, y2: i32 },
    Interval { interval: f64, time_limit: f64 },
}

/// Both flag groups must be supplied completely or not at all.
fn validate_argument_groups(cli: &Cli) -> Result<(), CaptureError> {
    if (cli.interval.is_some() || cli.time_limit.is_some())
        && (cli.interval.is_none() || cli.time_limit.is_none())
    {
        return Err(CaptureError::InvalidArgument(
            "Both --interval and --time-limit must be provided for interval capture".to_string(),
        ));
    }

    let coords = [cli.x1, cli.y1, cli.x2, cli.y2];
    if coords.iter().any(Option::is_some) && !coords.iter().all(Option::is_some) {
        return Err(CaptureError::InvalidArgument(
            "All coordinates (--x1, --y1, --x2, --y2) must be provided for region capture"
                .to_string(),
        ));
    }

    Ok(())
}

/// Interval flags win over region coordinates; no flags means full screen.
fn select_mode(cli: &Cli) -> CaptureMode {
    if let (Some(interval), Some(time_limit)) = (cli.interval, cli.time_limit) {
        return CaptureMode::Interval {
            interval,
            time_limit,
        };
    }

    if let (Some(x1), Some(y1), Some(x2), Some(y2)) = (cli.x1, cli.y1, cli.x2, cli.y2) {
        return CaptureMode::Region { x1, y1, x2, y2 };
    }

    CaptureMode::FullScreen
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    validate_argument_groups(cli)?;
    let mode = select_mode(cli);

    let session = CaptureSession::new(SessionOptions {
        output: cli.output.clone(),
        delay: cli.delay,
        timestamp: cli.timestamp,
    })?;

    match mode {
        CaptureMode::FullScreen => {
            let path = session.capture_screen()?;
            println!("Full-screen screenshot saved as {}", path.display());
        }
        CaptureMode::Region { x1, y1, x2, y2 } => {
            let path = session.capture_area(x1, y1, x2, y2)?;
            println!("Selected area screenshot saved as {}", path.display());
        }
        CaptureMode::Interval {
            interval,
            time_limit,
        } => {
            let count = session.capture_interval(interval, time_limit)?;
            println!("Interval capture completed: {count} screenshots saved");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quickshot").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_select_full_screen_mode() {
        let cli = parse(&[]);
        assert_eq!(cli.output, "screenshot.png");
        assert_eq!(cli.delay, 3);
        assert!(!cli.timestamp);
        assert_eq!(select_mode(&cli), CaptureMode::FullScreen);
    }

    #[test]
    fn complete_region_group_selects_region_mode() {
        let cli = parse(&["--x1", "0", "--y1", "0", "--x2", "100", "--y2", "50"]);
        validate_argument_groups(&cli).unwrap();
        assert_eq!(
            select_mode(&cli),
            CaptureMode::Region {
                x1: 0,
                y1: 0,
                x2: 100,
                y2: 50,
            }
        );
    }

    #[test]
    fn interval_flags_take_precedence_over_coordinates() {
        let cli = parse(&[
            "--x1", "0", "--y1", "0", "--x2", "100", "--y2", "50", "-i", "2", "-l", "10",
        ]);
        validate_argument_groups(&cli).unwrap();
        assert_eq!(
            select_mode(&cli),
            CaptureMode::Interval {
                interval: 2.0,
                time_limit: 10.0,
            }
        );
    }

    #[test]
    fn partial_region_group_is_a_usage_error() {
        let cli = parse(&["--x1", "10", "--y2", "20"]);
        let err = validate_argument_groups(&cli).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidArgument(_)));
    }

    #[test]
    fn partial_interval_group_is_a_usage_error() {
        let cli = parse(&["-i", "2"]);
        let err = validate_argument_groups(&cli).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidArgument(_)));
    }

    #[test]
    fn negative_delay_parses_for_the_session_to_reject() {
        let cli = parse(&["-d", "-1"]);
        assert_eq!(cli.delay, -1);
    }
}
