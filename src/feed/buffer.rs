//! Feed Buffer
//!
//! Append-only window of received items plus the viewing cursor.

use std::collections::HashSet;

use crate::models::FeedItem;

#[derive(Debug, Clone, Default)]
pub struct FeedBuffer {
    items: Vec<FeedItem>,
    /// Meaningful only while `items` is non-empty
    cursor: usize,
    seen: HashSet<String>,
}

impl FeedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&FeedItem> {
        self.items.get(index)
    }

    pub fn cursor(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.cursor)
    }

    /// Items from the cursor to the end, cursor included (0 when empty)
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.cursor)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// Append a page in arrival order. Returns how many items were kept.
    ///
    /// Without `dedup` every item is appended even if its id repeats.
    pub fn append(&mut self, page: Vec<FeedItem>, dedup: bool) -> usize {
        let before = self.items.len();
        for item in page {
            let fresh = self.seen.insert(item.id.clone());
            if dedup && !fresh {
                continue;
            }
            self.items.push(item);
        }
        self.items.len() - before
    }

    /// Move the cursor, clamped to the loaded window
    pub fn set_cursor(&mut self, target: usize) {
        if let Some(last) = self.last_index() {
            self.cursor = target.min(last);
        }
    }
}
