use kv_log_macro as log;

use waymark_routing::RouteMatcher;

use crate::history::NavigationEvents;
use crate::view::{DocumentLayer, Renderer};
use crate::Result;

const TITLE_KEY: &str = "title";

/// Re-evaluates the route matcher on every navigation event and hands the
/// outcome to the rendering and document layers.
pub struct Navigator<R: Renderer, D: DocumentLayer> {
    matcher: RouteMatcher,
    renderer: R,
    document: D,
}

impl<R: Renderer, D: DocumentLayer> Navigator<R, D> {
    pub fn new(matcher: RouteMatcher, renderer: R, document: D) -> Self {
        Navigator {
            matcher,
            renderer,
            document,
        }
    }

    /// Consume navigation events until the history source is dropped.
    pub async fn run(mut self, mut events: NavigationEvents) -> Result<()> {
        while let Some(path) = events.recv().await {
            self.handle(&path).await?;
        }

        Ok(())
    }

    /// Match one path and dispatch the result. The match itself is
    /// synchronous and never suspends; only the collaborators may.
    pub async fn handle(&mut self, path: &str) -> Result<()> {
        match self.matcher.match_path(path) {
            Some(matched) => {
                log::info!("Navigated", { path: path, view: matched.route.view });

                if let Some(title) = matched.metadata().get(TITLE_KEY) {
                    if !title.string().is_empty() {
                        self.document.set_title(title.string());
                    }
                }

                self.renderer
                    .mount(&matched.route.view, &matched.params)
                    .await?;
            }

            None => {
                log::error!("No route found", { path: path });
                self.renderer.not_found(path).await?;
            }
        }

        Ok(())
    }

    pub fn matcher(&self) -> &RouteMatcher {
        &self.matcher
    }
}
