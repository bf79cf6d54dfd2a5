mod history;
mod navigator;
mod view;

pub use history::{normalize_path, path_from_hash_url, MemoryHistory, NavigationEvents};
pub use navigator::Navigator;
pub use view::{DocumentLayer, NoopDocument, Renderer};
pub use waymark_routing::{
    ConfigurationError, MetadataMap, MetadataValue, Params, PatternParseError, RouteDefinition,
    RouteMatch, RouteMatcher, RoutePattern, ViewId,
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Install logging and drive a navigator over the given event stream until
/// the history source goes away.
pub async fn run<R: Renderer, D: DocumentLayer>(
    matcher: RouteMatcher,
    events: NavigationEvents,
    renderer: R,
    document: D,
) -> Result<()> {
    femme::start();

    Navigator::new(matcher, renderer, document).run(events).await
}
