use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, info, warn};

use crate::controllers::frame_loop::data::startup_settings::StartupSettings;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::DEFAULT_JULIA_C;

/// Raw command line. Values are kept as strings so that a bad value only
/// resets its own setting instead of rejecting the whole command line.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "escape_explorer", version, about = "Interactive Mandelbrot and Julia set explorer")]
pub struct CliArgs {
    /// Colour mode (bw, wb or color)
    #[arg(long, default_value = "bw")]
    pub color: String,

    /// Maximum iterations per pixel
    #[arg(long, default_value = "50", allow_negative_numbers = true)]
    pub iter: String,

    /// Show the HUD at startup (true or false)
    #[arg(long, default_value = "true")]
    pub hud: String,

    /// Frames per second
    #[arg(long, default_value = "60", allow_negative_numbers = true)]
    pub fps: String,

    /// Render the Julia set for the constant given with -c
    #[arg(long)]
    pub julia: bool,

    /// Julia constant
    #[arg(short = 'c', num_args = 2, value_names = ["RE", "IM"], allow_negative_numbers = true)]
    pub c: Option<Vec<String>>,

    /// Keep the render size fixed when the window is resized
    #[arg(long = "no-resize")]
    pub no_resize: bool,
}

impl CliArgs {
    /// Converts field by field, falling back to the default for any value
    /// that does not parse.
    #[must_use]
    pub fn to_settings(&self) -> StartupSettings {
        let defaults = StartupSettings::default();

        let colour_mode = self.color.parse::<ColourMode>().unwrap_or_else(|err| {
            warn!(%err, fallback = %defaults.colour_mode, "invalid --color");
            defaults.colour_mode
        });

        let max_iterations = parse_positive(&self.iter).unwrap_or_else(|| {
            warn!(value = %self.iter, fallback = defaults.max_iterations, "invalid --iter");
            defaults.max_iterations
        });

        let hud_visible = self.hud.trim().parse::<bool>().unwrap_or_else(|_| {
            warn!(value = %self.hud, fallback = defaults.hud_visible, "invalid --hud");
            defaults.hud_visible
        });

        let fps = parse_positive(&self.fps).unwrap_or_else(|| {
            warn!(value = %self.fps, fallback = defaults.fps, "invalid --fps");
            defaults.fps
        });

        let fractal = if self.julia {
            FractalKind::Julia { c: self.julia_c() }
        } else {
            if self.c.is_some() {
                debug!("-c has no effect without --julia");
            }
            FractalKind::Mandelbrot
        };

        let settings = StartupSettings {
            colour_mode,
            max_iterations,
            hud_visible,
            fps,
            fractal,
            resize_aware: !self.no_resize,
        };

        info!(
            colour_mode = %settings.colour_mode,
            max_iterations = settings.max_iterations,
            hud = settings.hud_visible,
            fps = settings.fps,
            fractal = %settings.fractal,
            resize_aware = settings.resize_aware,
            "startup settings"
        );

        settings
    }

    fn julia_c(&self) -> Complex {
        let Some(values) = &self.c else {
            return DEFAULT_JULIA_C;
        };

        match values.as_slice() {
            [re, im] => match (re.trim().parse::<f64>(), im.trim().parse::<f64>()) {
                (Ok(real), Ok(imag)) if real.is_finite() && imag.is_finite() => {
                    Complex::new(real, imag)
                }
                _ => {
                    warn!(re = %re, im = %im, fallback = %DEFAULT_JULIA_C, "invalid -c");
                    DEFAULT_JULIA_C
                }
            },
            _ => DEFAULT_JULIA_C,
        }
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

/// Parses a full command line, including the program name.
///
/// A command line clap cannot make sense of falls back to the default
/// settings. Help and version requests come back as `Err` so the caller can
/// print them and exit.
pub fn parse_settings<I, T>(args: I) -> Result<StartupSettings, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(args) {
        Ok(args) => Ok(args.to_settings()),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Err(err),
        Err(err) => {
            warn!(kind = ?err.kind(), "unrecognised command line, using default settings");
            Ok(StartupSettings::default())
        }
    }
}
