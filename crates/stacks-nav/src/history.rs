//! Addressable history: the browser's URL fragment plus its back/forward stack.

/// The host's history API.
///
/// `fragment` is the current entry's fragment without the leading `#`, or
/// `None` when the URL carries no fragment at all.
pub trait History {
    fn fragment(&self) -> Option<String>;

    /// Add a new entry after the current one, discarding any forward entries.
    fn push(&mut self, fragment: &str);

    /// Overwrite the current entry without adding one.
    fn replace(&mut self, fragment: &str);
}

/// In-memory history with browser semantics, for headless hosts and tests.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Option<String>>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self {
            entries: vec![None],
            cursor: 0,
        }
    }
}

impl MemoryHistory {
    /// A fresh page load with no fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page load that arrived with `fragment` already in the URL.
    #[must_use]
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            entries: vec![Some(fragment.to_string())],
            cursor: 0,
        }
    }

    /// Step back one entry, as the browser back button does.
    ///
    /// Returns the fragment the host would report in its change event, or
    /// `None` at the start of history.
    pub fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current_or_empty())
    }

    /// Step forward one entry. `None` at the end of history.
    pub fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current_or_empty())
    }

    /// Number of entries in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Option<String>] {
        &self.entries
    }

    fn current_or_empty(&self) -> String {
        self.entries[self.cursor].clone().unwrap_or_default()
    }
}

impl History for MemoryHistory {
    fn fragment(&self) -> Option<String> {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, fragment: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Some(fragment.to_string()));
        self.cursor += 1;
    }

    fn replace(&mut self, fragment: &str) {
        self.entries[self.cursor] = Some(fragment.to_string());
    }
}
