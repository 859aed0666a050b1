//! Visual theme and styling.

use console::Style;

use crate::runlog::LogLevel;

/// Terminal styles for run output.
#[derive(Debug, Clone)]
pub struct FixerTheme {
    /// Style for `[Progress]` prefixes (cyan).
    pub progress: Style,
    /// Style for `[Error]` lines (red bold).
    pub error: Style,
    /// Style for guide text and other plain blocks.
    pub text: Style,
}

impl Default for FixerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FixerTheme {
    pub fn new() -> Self {
        Self {
            progress: Style::new().cyan(),
            error: Style::new().red().bold(),
            text: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            progress: Style::new(),
            error: Style::new(),
            text: Style::new(),
        }
    }

    /// Format a record as `[Progress] msg` / `[Error] msg`.
    pub fn format_record(&self, level: LogLevel, msg: &str) -> String {
        match level {
            LogLevel::Info => format!(
                "{} {}",
                self.progress.apply_to(level.console_prefix()),
                msg
            ),
            LogLevel::Error => format!(
                "{}",
                self.error
                    .apply_to(format!("{} {}", level.console_prefix(), msg))
            ),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_progress() {
        let theme = FixerTheme::plain();
        assert_eq!(
            theme.format_record(LogLevel::Info, "Checking PyQt5 installation..."),
            "[Progress] Checking PyQt5 installation..."
        );
    }

    #[test]
    fn plain_theme_formats_error() {
        let theme = FixerTheme::plain();
        assert_eq!(
            theme.format_record(LogLevel::Error, "Qt plugin path not found."),
            "[Error] Qt plugin path not found."
        );
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = FixerTheme::new();
        let line = theme.format_record(LogLevel::Error, "boom");
        assert!(line.contains("boom"));
    }
}
