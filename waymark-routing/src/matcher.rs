use crate::error::ConfigurationError;
use crate::pattern::Params;
use crate::route::{MetadataMap, RouteDefinition};

/// Matches incoming paths against an ordered, immutable route table.
///
/// The table is fixed at construction and the matcher holds no other state,
/// so matching is a pure function of (table, path). Entry order is the
/// tie-break policy: the first entry that matches wins, which is what lets
/// a literal root route sit in front of a catch-all. A catch-all that is
/// not ordered last makes every later entry unreachable; that is a
/// configuration hazard, not something the matcher polices.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    routes: Vec<RouteDefinition>,
}

/// A selected route together with its extracted parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDefinition,
    pub params: Params,
}

impl RouteMatch<'_> {
    pub fn metadata(&self) -> &MetadataMap {
        &self.route.metadata
    }
}

impl RouteMatcher {
    /// Build a matcher over an ordered route table.
    ///
    /// Fails if the table is empty or if two entries share a literal
    /// pattern, which would make the exact match ambiguous.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, ConfigurationError> {
        if routes.is_empty() {
            return Err(ConfigurationError::EmptyTable);
        }

        for (index, route) in routes.iter().enumerate() {
            if !route.pattern.is_literal() {
                continue;
            }

            let duplicate = routes[..index].iter().any(|earlier| {
                earlier.pattern.is_literal() && earlier.pattern.source() == route.pattern.source()
            });

            if duplicate {
                return Err(ConfigurationError::DuplicatePattern(
                    route.pattern.source().to_string(),
                ));
            }
        }

        Ok(RouteMatcher { routes })
    }

    /// Scan the table in order and return the first entry matching `path`.
    ///
    /// `None` signals that nothing matched; picking a fallback (such as a
    /// not-found view) is the caller's decision.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(path) {
                return Some(RouteMatch { route, params });
            }
        }

        None
    }

    /// The metadata attached to a route at construction time.
    pub fn metadata_for<'a>(&self, route: &'a RouteDefinition) -> &'a MetadataMap {
        &route.metadata
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }
}
