pub mod error;
pub mod matcher;
pub mod pattern;
pub mod route;

// Re-export commonly used types
pub use error::{ConfigurationError, PatternParseError};
pub use matcher::{RouteMatch, RouteMatcher};
pub use pattern::{Params, RoutePattern};
pub use route::{MetadataMap, MetadataValue, RouteDefinition, ViewId};
