//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and tables (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` is exclusive and overrides everything; `--format plain` and
    /// `TERM=dumb` force plain; pretty only when stdout is a TTY.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        assert_eq!(
            OutputMode::resolve(true, Some("plain"), true, false),
            OutputMode::Json
        );
    }

    #[test]
    fn test_format_plain_forces_plain() {
        assert_eq!(
            OutputMode::resolve(false, Some("plain"), true, false),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_dumb_terminal_forces_plain() {
        assert_eq!(
            OutputMode::resolve(false, None, true, true),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_tty_defaults_pretty() {
        assert_eq!(
            OutputMode::resolve(false, None, true, false),
            OutputMode::Pretty
        );
    }

    #[test]
    fn test_non_tty_defaults_plain() {
        assert_eq!(
            OutputMode::resolve(false, None, false, false),
            OutputMode::Plain
        );
    }
}
