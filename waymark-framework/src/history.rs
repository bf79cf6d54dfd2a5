use tokio::sync::mpsc;

/// Stream of navigation events consumed by the navigator. Each event is a
/// normalized path string.
pub type NavigationEvents = mpsc::UnboundedReceiver<String>;

/// An in-process history source.
///
/// Delivers the initial path as the first event on construction and one
/// event per navigation, so the navigator renders once at startup without
/// a special case. The actual storage mechanism a deployment uses (hash
/// fragment, push-state) stays outside; this is the seam they plug into.
pub struct MemoryHistory {
    current: String,
    sender: mpsc::UnboundedSender<String>,
}

impl MemoryHistory {
    pub fn new(initial: impl ToString) -> (MemoryHistory, NavigationEvents) {
        let (sender, receiver) = mpsc::unbounded_channel();

        let current = normalize_path(&initial.to_string());
        sender
            .send(current.clone())
            .expect("Failed to deliver initial navigation event");

        (MemoryHistory { current, sender }, receiver)
    }

    /// The most recently published path.
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Publish a navigation event. The query string and fragment are
    /// stripped here; the matcher only ever sees the bare path.
    pub fn navigate(&mut self, path: impl ToString) {
        let path = normalize_path(&path.to_string());
        self.current = path.clone();
        self.sender
            .send(path)
            .expect("Failed to send navigation event");
    }
}

/// Strip the query string and fragment from a raw path.
///
/// No leading slash is invented: an empty input stays empty, and whether
/// that matches anything is the route table's business.
pub fn normalize_path(raw: &str) -> String {
    let without_fragment = match raw.find('#') {
        Some(index) => &raw[..index],
        None => raw,
    };

    let without_query = match without_fragment.find('?') {
        Some(index) => &without_fragment[..index],
        None => without_fragment,
    };

    without_query.to_string()
}

/// Extract the navigable path from a hash-fragment URL, the storage scheme
/// the reference configuration uses: `https://host/app#/foo?q=1` carries
/// the path `/foo`. A URL with no fragment, or one that is empty after
/// stripping its query, is at the root path.
pub fn path_from_hash_url(url: &str) -> String {
    let fragment = match url.find('#') {
        Some(index) => &url[index + 1..],
        None => "",
    };

    let path = normalize_path(fragment);
    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_query() {
        assert_eq!(normalize_path("/foo?q=1"), "/foo");
    }

    #[test]
    fn test_normalize_strips_fragment() {
        assert_eq!(normalize_path("/foo#section"), "/foo");
    }

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        assert_eq!(normalize_path("/foo?q=1#section"), "/foo");
        assert_eq!(normalize_path("/foo#section?not-a-query"), "/foo");
    }

    #[test]
    fn test_normalize_leaves_bare_paths_alone() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/foo/bar"), "/foo/bar");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_hash_url_with_path() {
        assert_eq!(path_from_hash_url("https://host/app#/foo/bar"), "/foo/bar");
    }

    #[test]
    fn test_hash_url_query_inside_fragment() {
        assert_eq!(path_from_hash_url("https://host/app#/foo?q=1"), "/foo");
    }

    #[test]
    fn test_hash_url_without_fragment_is_root() {
        assert_eq!(path_from_hash_url("https://host/app"), "/");
        assert_eq!(path_from_hash_url("https://host/app#"), "/");
    }

    #[test]
    fn test_current_path_follows_navigation() {
        let (mut history, mut events) = MemoryHistory::new("/");
        assert_eq!(history.current_path(), "/");

        history.navigate("/foo?q=1");
        assert_eq!(history.current_path(), "/foo");

        assert_eq!(events.try_recv(), Ok("/".to_string()));
        assert_eq!(events.try_recv(), Ok("/foo".to_string()));
    }
}
