//! Navigator state machine. The browser binding lives in the frontend; the
//! state transitions are here so they can be tested without a DOM.

use super::route_info::normalize_path;

/// Session history the navigator writes to.
pub trait History {
    /// Current pathname as reported by the history.
    fn location(&self) -> String;
    /// Push a new entry without reloading.
    fn push(&mut self, path: &str);
    fn scroll_to_top(&mut self);
}

/// Single owner of the current path.
#[derive(Debug, Clone)]
pub struct RouteState<H: History> {
    history: H,
    current: String,
}

impl<H: History> RouteState<H> {
    /// Start at whatever location the history reports.
    pub fn new(history: H) -> Self {
        let current = normalize_path(&history.location());
        Self { history, current }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access for hosts that drive back/forward themselves.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Go to `path`. Returns `false` (and touches nothing) when the
    /// normalized path is already current.
    pub fn navigate(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if path == self.current {
            return false;
        }
        self.history.push(&path);
        self.history.scroll_to_top();
        self.current = path;
        true
    }

    /// Re-read the location after back/forward. Returns whether it changed.
    pub fn sync_from_history(&mut self) -> bool {
        let location = normalize_path(&self.history.location());
        if location == self.current {
            return false;
        }
        self.current = location;
        true
    }
}

/// In-memory history with back/forward, used by tests and non-browser hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    scrolls: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize_path(initial)],
            index: 0,
            scrolls: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}
