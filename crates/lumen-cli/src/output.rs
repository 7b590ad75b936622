//! Colored terminal diagnostics.
//!
//! Uses `termcolor` for cross-platform colored output. Respects the
//! `NO_COLOR` environment variable; non-terminal stderr stays plain.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn resolve_color_choice() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Write the failure message to stderr: the message text, then a newline.
pub fn report_error(message: &str) {
    let mut stderr = StandardStream::stderr(resolve_color_choice());
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red)).set_bold(true);
    let _ = stderr.set_color(&spec);
    let _ = write!(stderr, "{}", message);
    let _ = stderr.reset();
    let _ = writeln!(stderr);
}
