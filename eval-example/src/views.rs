use async_trait::async_trait;

use waymark::{DocumentLayer, Params, Renderer, Result, ViewId};

/// Renders each view as plain lines on stdout.
pub struct ConsoleRenderer;

#[async_trait]
impl Renderer for ConsoleRenderer {
    async fn mount(&mut self, view: &ViewId, params: &Params) -> Result<()> {
        match view.as_str() {
            "eval" => println!("[eval] welcome home"),

            "hello-world" => {
                let path = params.get("path").map(String::as_str).unwrap_or("");
                println!("[hello-world] hello from '{}'", path);
            }

            other => println!("[{}] no renderer registered for this view", other),
        }

        Ok(())
    }

    async fn not_found(&mut self, path: &str) -> Result<()> {
        println!("[error] nothing routes '{}'", path);
        Ok(())
    }
}

/// Prints title changes the way a browser updates the tab.
pub struct ConsoleDocument;

impl DocumentLayer for ConsoleDocument {
    fn set_title(&mut self, title: &str) {
        println!("=== {} ===", title);
    }
}
