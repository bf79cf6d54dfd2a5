use async_trait::async_trait;

use waymark_routing::{Params, ViewId};

use crate::Result;

/// The rendering layer. Resolves a view identifier to a concrete view and
/// mounts it with the parameters extracted from the path.
#[async_trait]
pub trait Renderer: Send {
    async fn mount(&mut self, view: &ViewId, params: &Params) -> Result<()>;

    /// Fallback for a path no route matched. What to show is the
    /// application's decision; the matcher only reports the miss.
    async fn not_found(&mut self, path: &str) -> Result<()>;
}

/// The document layer, e.g. whatever owns the window or tab title.
pub trait DocumentLayer: Send {
    fn set_title(&mut self, title: &str);
}

/// Document layer for applications that never touch the title.
pub struct NoopDocument;

impl DocumentLayer for NoopDocument {
    fn set_title(&mut self, _title: &str) {}
}
