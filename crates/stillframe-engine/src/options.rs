//! Command-line option parsing for the viewer.
//!
//! The surface is intentionally tiny: `-x <width>`, `-y <height>`,
//! `-f <fps>`. Anything else is ignored without complaint, and a flag at
//! the end of the argument list with no value behind it is dropped rather
//! than treated as an error. A value that fails to parse keeps the flag's
//! default and logs a warning.

use std::num::NonZeroU32;

const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;
const DEFAULT_FPS: u32 = 60;

/// Resolved viewer options.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ViewerOptions {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Target frame rate. Nonzero by construction; the frame budget is
    /// derived from this by integer division.
    pub fps: NonZeroU32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: NonZeroU32::new(DEFAULT_FPS).expect("default fps is nonzero"),
        }
    }
}

impl ViewerOptions {
    /// Parses options from an argument list (without the program name).
    ///
    /// Later occurrences of a flag override earlier ones.
    pub fn parse<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            let flag = arg.as_ref();
            if !matches!(flag, "-x" | "-y" | "-f") {
                continue;
            }

            // A trailing flag with no value is silently dropped.
            let Some(value) = args.next() else { break };
            let value = value.as_ref();

            match flag {
                "-x" => apply_u32(flag, value, &mut opts.width),
                "-y" => apply_u32(flag, value, &mut opts.height),
                "-f" => match value.parse::<u32>().ok().and_then(NonZeroU32::new) {
                    Some(fps) => opts.fps = fps,
                    None => {
                        log::warn!("ignoring invalid value {value:?} for -f, keeping {DEFAULT_FPS}");
                    }
                },
                _ => unreachable!(),
            }
        }

        opts
    }
}

fn apply_u32(flag: &str, value: &str, slot: &mut u32) {
    match value.parse::<u32>() {
        Ok(v) => *slot = v,
        Err(_) => {
            log::warn!("ignoring invalid value {value:?} for {flag}, keeping {slot}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ViewerOptions {
        ViewerOptions::parse(args.iter().copied())
    }

    #[test]
    fn no_args_yields_defaults() {
        assert_eq!(parse(&[]), ViewerOptions::default());
    }

    #[test]
    fn width_and_height_parse() {
        let opts = parse(&["-x", "800", "-y", "600"]);
        assert_eq!(opts.width, 800);
        assert_eq!(opts.height, 600);
        assert_eq!(opts.fps.get(), 60);
    }

    #[test]
    fn fps_parses() {
        assert_eq!(parse(&["-f", "30"]).fps.get(), 30);
    }

    #[test]
    fn trailing_flag_without_value_is_ignored() {
        assert_eq!(parse(&["-f"]), ViewerOptions::default());
        assert_eq!(parse(&["-x", "800", "-y"]).width, 800);
    }

    #[test]
    fn unparseable_value_keeps_default() {
        assert_eq!(parse(&["-x", "wide"]).width, 640);
        assert_eq!(parse(&["-f", "fast"]).fps.get(), 60);
    }

    #[test]
    fn zero_fps_keeps_default() {
        assert_eq!(parse(&["-f", "0"]).fps.get(), 60);
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let opts = parse(&["--verbose", "-z", "12", "-x", "320"]);
        assert_eq!(opts.width, 320);
        assert_eq!(opts.height, 480);
    }

    #[test]
    fn later_flags_override_earlier_ones() {
        assert_eq!(parse(&["-x", "100", "-x", "200"]).width, 200);
    }

    #[test]
    fn flag_value_can_look_like_a_flag() {
        // "-y" consumes the next argument unconditionally, so "-f" here is
        // swallowed as a (bad) value and fps stays at the default.
        let opts = parse(&["-y", "-f", "120"]);
        assert_eq!(opts.height, 480);
        assert_eq!(opts.fps.get(), 60);
    }
}
