use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternParseError;

pub type Params = HashMap<String, String>;

/// A route pattern that can match paths and extract parameters.
///
/// Two shapes are recognised: a literal path like `/` or `/about`, and a
/// pattern whose final segment is a trailing catch-all capture like
/// `/:path(.*)`. Patterns serialize as their source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RoutePattern {
    source: String,
    kind: PatternKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternKind {
    Literal,
    CatchAll { prefix: String, param: String },
}

impl RoutePattern {
    /// Parse a pattern string like `/`, `/about` or `/:path(.*)`.
    pub fn parse(source: &str) -> Result<Self, PatternParseError> {
        if !source.starts_with('/') {
            return Err(PatternParseError::MissingLeadingSlash(source.to_string()));
        }

        let kind = if let Some(head) = source.strip_suffix("(.*)") {
            let (prefix, segment) = match head.rfind('/') {
                Some(index) => (&head[..index], &head[index + 1..]),
                None => ("", head),
            };

            let param = segment
                .strip_prefix(':')
                .ok_or_else(|| PatternParseError::MalformedCapture(source.to_string()))?;
            if param.is_empty() {
                return Err(PatternParseError::EmptyParamName(source.to_string()));
            }

            PatternKind::CatchAll {
                prefix: prefix.to_string(),
                param: param.to_string(),
            }
        } else {
            PatternKind::Literal
        };

        Ok(RoutePattern {
            source: source.to_string(),
            kind,
        })
    }

    /// Check if a path matches this pattern and extract parameters.
    ///
    /// Literal patterns match by string equality. A root-level catch-all
    /// matches literally any input, the empty string included; the capture
    /// is the input minus one leading `/`, so `/foo/bar` binds `foo/bar`
    /// and both `/` and `` bind the empty string. A prefixed catch-all
    /// matches its prefix exactly or extended at a `/` boundary.
    pub fn matches(&self, path: &str) -> Option<Params> {
        match &self.kind {
            PatternKind::Literal => {
                if self.source == path {
                    Some(Params::new())
                } else {
                    None
                }
            }

            PatternKind::CatchAll { prefix, param } => {
                let capture = if prefix.is_empty() {
                    path.strip_prefix('/').unwrap_or(path)
                } else {
                    let rest = path.strip_prefix(prefix.as_str())?;
                    if rest.is_empty() {
                        rest
                    } else {
                        rest.strip_prefix('/')?
                    }
                };

                let mut params = Params::new();
                params.insert(param.clone(), capture.to_string());
                Some(params)
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Literal patterns participate in the exact-match uniqueness check.
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, PatternKind::Literal)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for RoutePattern {
    type Err = PatternParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        RoutePattern::parse(source)
    }
}

impl TryFrom<String> for RoutePattern {
    type Error = PatternParseError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        RoutePattern::parse(&source)
    }
}

impl From<RoutePattern> for String {
    fn from(pattern: RoutePattern) -> String {
        pattern.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_exact_match() {
        let pattern = RoutePattern::parse("/users/list").unwrap();
        assert!(pattern.is_literal());
        assert!(pattern.matches("/users/list").is_some());
        assert!(pattern.matches("/users/other").is_none());
        assert!(pattern.matches("/users").is_none());
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let pattern = RoutePattern::parse("/about").unwrap();
        assert!(pattern.matches("/about").is_some());
        assert!(pattern.matches("/About").is_none());
    }

    #[test]
    fn test_literal_trailing_slash_mismatch() {
        let pattern = RoutePattern::parse("/about").unwrap();
        assert!(pattern.matches("/about/").is_none());
    }

    #[test]
    fn test_root_path() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/users").is_none());
        assert!(pattern.matches("").is_none());
    }

    #[test]
    fn test_root_catch_all_matches_anything() {
        let pattern = RoutePattern::parse("/:path(.*)").unwrap();
        assert!(!pattern.is_literal());

        let params = pattern.matches("/foo/bar").unwrap();
        assert_eq!(params.get("path"), Some(&"foo/bar".to_string()));

        let params = pattern.matches("/").unwrap();
        assert_eq!(params.get("path"), Some(&"".to_string()));

        let params = pattern.matches("").unwrap();
        assert_eq!(params.get("path"), Some(&"".to_string()));
    }

    #[test]
    fn test_prefixed_catch_all() {
        let pattern = RoutePattern::parse("/docs/:rest(.*)").unwrap();

        let params = pattern.matches("/docs/guide/install").unwrap();
        assert_eq!(params.get("rest"), Some(&"guide/install".to_string()));

        let params = pattern.matches("/docs").unwrap();
        assert_eq!(params.get("rest"), Some(&"".to_string()));

        assert!(pattern.matches("/docsette").is_none());
        assert!(pattern.matches("/other").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_leading_slash() {
        assert!(matches!(
            RoutePattern::parse("about"),
            Err(PatternParseError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            RoutePattern::parse(""),
            Err(PatternParseError::MissingLeadingSlash(_))
        ));
    }

    #[test]
    fn test_parse_rejects_capture_without_name() {
        assert!(matches!(
            RoutePattern::parse("/foo(.*)"),
            Err(PatternParseError::MalformedCapture(_))
        ));
        assert!(matches!(
            RoutePattern::parse("/:(.*)"),
            Err(PatternParseError::EmptyParamName(_))
        ));
    }

    #[test]
    fn test_display_round_trips_source() {
        let pattern = RoutePattern::parse("/:path(.*)").unwrap();
        assert_eq!(pattern.to_string(), "/:path(.*)");
        assert_eq!(pattern.source(), "/:path(.*)");
    }
}
