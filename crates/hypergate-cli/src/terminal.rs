//! Terminal capability detection and ANSI styling for the CLI.

use std::env;

const RESET: &str = "\x1b[0m";
const EMPHASIS: &str = "\x1b[1;97m";
const LABEL: &str = "\x1b[90m";
const VALUE: &str = "\x1b[32m";
const FRAME: &str = "\x1b[36m";
const BANNER: &str = "\x1b[38;5;208m";

/// Semantic styles used by the text renderers.
///
/// Each field holds either a raw ANSI escape sequence or an empty string
/// when styling is disabled, so render code can interpolate the fields
/// unconditionally.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    /// Closes any open style.
    pub reset: &'static str,
    /// Gate names and headings (bold bright white).
    pub emphasis: &'static str,
    /// Secondary labels and counts (gray).
    pub label: &'static str,
    /// Link weights (green).
    pub value: &'static str,
    /// Banner frame (cyan).
    pub frame: &'static str,
    /// Banner lettering (256-color orange).
    pub banner: &'static str,
}

impl Styles {
    /// Styles carrying real ANSI sequences.
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            reset: RESET,
            emphasis: EMPHASIS,
            label: LABEL,
            value: VALUE,
            frame: FRAME,
            banner: BANNER,
        }
    }

    /// Styles that render to nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            reset: "",
            emphasis: "",
            label: "",
            value: "",
            frame: "",
            banner: "",
        }
    }

    /// Pick `ansi()` or `none()` from the terminal environment.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::ansi()
        } else {
            Self::none()
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether ANSI color output should be used.
///
/// Honors the `NO_COLOR` convention (https://no-color.org/) and treats
/// `TERM=dumb` as colorless.
#[must_use]
pub fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !matches!(env::var("TERM"), Ok(term) if term.eq_ignore_ascii_case("dumb"))
}

/// Whether the terminal is expected to render non-ASCII glyphs.
///
/// Unix locales advertise this through `LANG`/`LC_ALL`; Windows consoles
/// are assumed capable unless `TERM=dumb`.
#[must_use]
pub fn supports_unicode() -> bool {
    let locale_hints = [env::var("LANG"), env::var("LC_ALL")];
    if locale_hints
        .iter()
        .any(|hint| matches!(hint, Ok(value) if value.to_uppercase().contains("UTF")))
    {
        return true;
    }
    #[cfg(windows)]
    {
        !matches!(env::var("TERM"), Ok(term) if term.eq_ignore_ascii_case("dumb"))
    }
    #[cfg(not(windows))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_styles_render_to_nothing() {
        let styles = Styles::none();
        assert!(styles.reset.is_empty());
        assert!(styles.emphasis.is_empty());
        assert!(styles.banner.is_empty());
    }

    #[test]
    fn ansi_styles_are_escape_sequences() {
        let styles = Styles::ansi();
        assert!(styles.reset.starts_with('\x1b'));
        assert!(styles.value.starts_with('\x1b'));
    }
}
