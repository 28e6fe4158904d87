//! Loader-specific types for UCTE file processing.

use thiserror::Error;

/// Errors that can occur while loading a UCTE file.
///
/// Malformed fields are not errors: they decode to `None` on the record.
/// Only problems with the file as a whole end up here.
#[derive(Error, Debug)]
pub enum UcteError {
    /// I/O error reading the UCTE file.
    #[error("IO error reading UCTE file: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The file name does not follow the `yyyymmdd_HHMM_TYw_ccv.uct` convention.
    #[error("Invalid UCTE file name '{name}': {reason}")]
    InvalidFileName {
        /// The offending file name.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A section start marker was found without its end marker.
    ///
    /// Only reported when [`UcteConfig::require_end_marker`] is set.
    #[error("Section '{start}' is not terminated by '{end}'")]
    UnterminatedSection {
        /// The start marker that was found.
        start: String,
        /// The end marker that never appeared.
        end: String,
    },
}

/// Result type for UCTE operations.
pub type UcteResult<T> = Result<T, UcteError>;

/// Configuration for UCTE loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UcteConfig {
    /// Whether a section whose end marker is missing is an error.
    ///
    /// When false, such a section extends to the end of the input.
    pub require_end_marker: bool,
    /// Country code for the `##Z<cc>` node block, instead of the one in the file name.
    ///
    /// The file name must still follow the UCTE naming convention; this only
    /// selects a different node block, e.g. in multi-country exports.
    pub country_code: Option<String>,
}

impl UcteConfig {
    /// Creates a config that rejects unterminated sections.
    pub fn strict() -> Self {
        Self {
            require_end_marker: true,
            ..Default::default()
        }
    }

    /// Creates a config that reads the node block of the given country.
    pub fn for_country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: Some(country_code.into()),
            ..Default::default()
        }
    }
}

/// Statistics from loading a UCTE file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Total lines in the source.
    pub source_lines: usize,
    /// Country node records.
    pub nodes: usize,
    /// Cross-border node records.
    pub x_nodes: usize,
    /// Line records.
    pub lines: usize,
    /// Transformer records.
    pub transformers: usize,
    /// Transformer regulation records.
    pub regulations: usize,
    /// Transformer tap-step records.
    pub spec_params: usize,
    /// Time taken to parse in milliseconds.
    pub parse_time_ms: u64,
}

impl LoadStats {
    /// Returns the number of records across all sections.
    pub fn total_records(&self) -> usize {
        self.nodes
            + self.x_nodes
            + self.lines
            + self.transformers
            + self.regulations
            + self.spec_params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = UcteConfig::default();
        assert!(!config.require_end_marker);
        assert_eq!(config.country_code, None);
    }

    #[test]
    fn test_config_constructors() {
        assert!(UcteConfig::strict().require_end_marker);

        let config = UcteConfig::for_country("SI");
        assert_eq!(config.country_code.as_deref(), Some("SI"));
        assert!(!config.require_end_marker);
    }

    #[test]
    fn test_total_records() {
        let stats = LoadStats {
            nodes: 10,
            x_nodes: 2,
            lines: 7,
            transformers: 3,
            regulations: 1,
            spec_params: 4,
            ..Default::default()
        };
        assert_eq!(stats.total_records(), 27);
    }

    #[test]
    fn test_error_messages() {
        let err = UcteError::UnterminatedSection {
            start: "##L".to_string(),
            end: "##T".to_string(),
        };
        assert_eq!(err.to_string(), "Section '##L' is not terminated by '##T'");

        let err = UcteError::InvalidFileName {
            name: "a.uct".to_string(),
            reason: "too short",
        };
        assert_eq!(err.to_string(), "Invalid UCTE file name 'a.uct': too short");
    }
}
