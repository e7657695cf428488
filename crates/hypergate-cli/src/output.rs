//! Output helpers shared by the CLI subcommands.

use clap::ValueEnum;

use crate::terminal::{supports_unicode, Styles};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print the startup banner.
///
/// Block glyphs are only used when the locale advertises UTF support;
/// otherwise a plain ASCII frame goes out. Styling follows `Styles::detect`.
pub fn print_logo() {
    let styles = Styles::detect();
    let (banner, frame, reset) = (styles.banner, styles.frame, styles.reset);

    if supports_unicode() {
        println!(
            "{frame}╭───────────────────────────────────────╮{reset}
{frame}│{banner} ░█░█░█░█░█▀█░█▀▀░█▀▄░█▀▀░█▀█░▀█▀░█▀▀░ {frame}│{reset}
{frame}│{banner} ░█▀█░▀█▀░█▀▀░█▀▀░█▀▄░█░█░█▀█░░█░░█▀▀░ {frame}│{reset}
{frame}│{banner} ░▀░▀░░▀░░▀░░░▀▀▀░▀░▀░▀▀▀░▀░▀░░▀░░▀▀▀░ {frame}│{reset}
{frame}├───────────────────────────────────────┤{reset}
{frame}│{banner}               [ C L I ]               {frame}│{reset}
{frame}╰───────────────────────────────────────╯{reset}",
            frame = frame,
            banner = banner,
            reset = reset
        );
    } else {
        println!(
            "{banner}+---------------------------------------------+
|  HYPERGATE                                  |
|  >> GATE NETWORK ROUTING INTERFACE          |
+---------------------------------------------+{reset}",
            banner = banner,
            reset = reset
        );
    }
}
