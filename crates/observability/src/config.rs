use std::env;

/// Environment variable holding the filter directive (tracing's convention).
pub const FILTER_ENV: &str = "RUST_LOG";
/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "TALLYBOOK_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line, human-oriented.
    Pretty,
    /// Single-line, human-oriented.
    Compact,
}

impl LogFormat {
    /// Parse a format name (case-insensitive). `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `tallybook_inventory=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Raw format value that could not be parsed, reported once tracing is up.
    pub unrecognized_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            unrecognized_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read [`FILTER_ENV`] and [`FORMAT_ENV`], falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_values(env::var(FILTER_ENV).ok(), env::var(FORMAT_ENV).ok())
    }

    /// Build from optional raw values (as they would come from the environment).
    pub fn from_values(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, unrecognized_format) = match format {
            None => (LogFormat::default(), None),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(parsed) => (parsed, None),
                None => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            filter,
            format,
            unrecognized_format,
        }
    }
}
