/// A single successful calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub expression: String,
    pub result: f64,
}

/// An append-only, ordered ledger of successful calculations
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    /// Returns a new, empty history
    pub fn new() -> History {
        History::default()
    }

    /// Appends an entry
    pub fn record(&mut self, expression: impl Into<String>, result: f64) {
        self.entries.push(Entry {
            expression: expression.into(),
            result,
        });
    }

    /// Returns a copy of all entries in the order they were recorded
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
