//! Command line arguments trait and default implementation.

use clap::Parser;

/// Trait for supplying application configuration.
///
/// The trait provides defaults for every option, so custom argument
/// types only override what they need. [`DefaultAppArgs`] is a
/// clap-backed implementation covering the common flags.
pub trait AppArgs: Sized {
    /// Parse command line arguments.
    fn parse() -> Self;

    /// Get the initial window width.
    fn window_width(&self) -> u32 {
        1000
    }

    /// Get the initial window height.
    fn window_height(&self) -> u32 {
        900
    }

    /// Get the window title.
    fn window_title(&self) -> &str {
        "Terrella"
    }

    /// Get whether the window is resizable.
    fn resizable(&self) -> bool {
        true
    }

    /// Get whether VSync is enabled.
    fn vsync(&self) -> bool {
        true
    }

    /// Get the background clear color as linear RGB.
    fn clear_color(&self) -> [f64; 3] {
        [0.6, 0.2, 0.29]
    }

    /// Get the maximum number of frames to render before auto-exit.
    ///
    /// Useful for smoke tests: run a demo for a handful of frames and
    /// verify it starts and renders without errors.
    fn max_frames(&self) -> Option<u64> {
        None
    }
}

/// Default clap-backed arguments.
#[derive(Debug, Parser)]
#[command(about = "Terrella demo application", version)]
pub struct DefaultAppArgs {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "Terrella")]
    pub title: String,

    /// Disable vertical sync
    #[arg(long)]
    pub no_vsync: bool,

    /// Exit after rendering this many frames
    #[arg(long)]
    pub max_frames: Option<u64>,
}

impl AppArgs for DefaultAppArgs {
    fn parse() -> Self {
        Parser::parse()
    }

    fn window_width(&self) -> u32 {
        self.width
    }

    fn window_height(&self) -> u32 {
        self.height
    }

    fn window_title(&self) -> &str {
        &self.title
    }

    fn vsync(&self) -> bool {
        !self.no_vsync
    }

    fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_trait() {
        let args = DefaultAppArgs::try_parse_from(["demo"]).unwrap();
        assert_eq!(args.window_width(), 1000);
        assert_eq!(args.window_height(), 900);
        assert_eq!(args.window_title(), "Terrella");
        assert!(args.vsync());
        assert_eq!(args.max_frames(), None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = DefaultAppArgs::try_parse_from([
            "demo",
            "--width",
            "640",
            "--height",
            "480",
            "--no-vsync",
            "--max-frames",
            "3",
        ])
        .unwrap();
        assert_eq!(args.window_width(), 640);
        assert_eq!(args.window_height(), 480);
        assert!(!args.vsync());
        assert_eq!(args.max_frames(), Some(3));
    }
}
