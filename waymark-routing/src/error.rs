use std::fmt;

/// Pattern strings the parser cannot turn into a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternParseError {
    /// Patterns are absolute paths and must start with '/'
    MissingLeadingSlash(String),
    /// A "(.*)" suffix whose segment carries no ":name" capture
    MalformedCapture(String),
    /// A capture segment with an empty parameter name
    EmptyParamName(String),
}

impl fmt::Display for PatternParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternParseError::MissingLeadingSlash(pattern) => {
                write!(f, "Pattern '{}' must start with '/'", pattern)
            }
            PatternParseError::MalformedCapture(pattern) => {
                write!(
                    f,
                    "Pattern '{}' ends with '(.*)' but has no ':name' capture segment",
                    pattern
                )
            }
            PatternParseError::EmptyParamName(pattern) => {
                write!(f, "Pattern '{}' has a capture with an empty name", pattern)
            }
        }
    }
}

impl std::error::Error for PatternParseError {}

/// Structurally invalid route tables, detected at construction time
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The route table has no entries
    EmptyTable,
    /// Two entries share a literal pattern, so the exact match is ambiguous
    DuplicatePattern(String),
    /// An entry's pattern string failed to parse
    InvalidPattern(PatternParseError),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyTable => {
                write!(f, "Route table is empty")
            }
            ConfigurationError::DuplicatePattern(pattern) => {
                write!(f, "Route table has more than one entry for '{}'", pattern)
            }
            ConfigurationError::InvalidPattern(err) => {
                write!(f, "Invalid route pattern: {}", err)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::InvalidPattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PatternParseError> for ConfigurationError {
    fn from(err: PatternParseError) -> Self {
        ConfigurationError::InvalidPattern(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_display() {
        let err = ConfigurationError::EmptyTable;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_duplicate_pattern_display() {
        let err = ConfigurationError::DuplicatePattern("/about".to_string());
        assert!(err.to_string().contains("more than one entry"));
        assert!(err.to_string().contains("/about"));
    }

    #[test]
    fn test_missing_leading_slash_display() {
        let err = PatternParseError::MissingLeadingSlash("about".to_string());
        assert!(err.to_string().contains("must start with '/'"));
        assert!(err.to_string().contains("about"));
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = PatternParseError::EmptyParamName("/:(.*)".to_string());
        let err: ConfigurationError = parse_err.clone().into();
        assert!(matches!(err, ConfigurationError::InvalidPattern(_)));
        assert!(err.to_string().contains("Invalid route pattern"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
