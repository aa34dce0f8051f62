//! Formatter configuration.

/// Formatter configuration.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Indentation width (in spaces).
    pub indent_width: usize,
    /// Use tabs instead of spaces.
    pub use_tabs: bool,
    /// Add trailing newline.
    pub trailing_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
            trailing_newline: true,
        }
    }
}

impl FormatConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Use tabs instead of spaces.
    pub fn use_tabs(mut self, use_tabs: bool) -> Self {
        self.use_tabs = use_tabs;
        self
    }

    /// Emit a trailing newline at the end of the file.
    pub fn trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Get the indentation string for one level.
    pub fn indent_str(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}
