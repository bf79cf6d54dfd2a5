mod views;

use maplit::hashmap;
use tokio::io::{AsyncBufReadExt, BufReader};
use waymark::{MemoryHistory, MetadataValue, Result, RouteDefinition, RouteMatcher};

use views::{ConsoleDocument, ConsoleRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    let matcher = RouteMatcher::new(vec![
        RouteDefinition::new("/", "eval")?.with_metadata(hashmap! {
            "title".to_string() => MetadataValue::from("Home"),
        }),
        RouteDefinition::new("/:path(.*)", "hello-world")?,
    ])?;

    let (mut history, events) = MemoryHistory::new("/");

    let navigator = tokio::spawn(waymark::run(
        matcher,
        events,
        ConsoleRenderer,
        ConsoleDocument,
    ));

    // Each stdin line is a navigation, as if the location hash changed.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        history.navigate(path);
    }

    drop(history);
    navigator.await??;

    Ok(())
}
