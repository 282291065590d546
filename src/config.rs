//! Configuration handling for csvtable

/// Default field separator
pub const DEFAULT_SEPARATOR: &str = ",";

/// Default comment line prefix
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Output format for rendering a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Separator, comment and quoting settings used when loading and saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Field separator
    pub separator: String,
    /// Lines starting with this prefix are skipped on load; empty disables it
    pub comment_prefix: String,
    /// Double quote every field when saving
    pub quote_fields: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            quote_fields: false,
        }
    }
}

impl Config {
    /// Create a Config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the comment line prefix
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Quote all fields when saving
    pub fn with_quote_fields(mut self, quote: bool) -> Self {
        self.quote_fields = quote;
        self
    }

    /// Check whether a line is a comment under this configuration
    pub fn is_comment(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.starts_with(self.comment_prefix.as_str())
    }
}
