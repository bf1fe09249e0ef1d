//! Keyword relevance selection over the record log.

use medscribe_core::{ContextSelector, PatientRecord};
use tracing::debug;

/// Substring keyword matcher with a most-recent fallback window.
///
/// A record is relevant when any whitespace-separated query keyword occurs
/// case-insensitively anywhere in its full textual rendering. Relevance is
/// binary; matches keep store order. When nothing matches, the most recent
/// `fallback_window` records stand in so the responder always receives
/// context from a non-empty store.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSelector {
    fallback_window: usize,
}

impl KeywordSelector {
    #[must_use]
    pub const fn new() -> Self {
        Self { fallback_window: 5 }
    }

    #[must_use]
    pub const fn with_fallback_window(mut self, window: usize) -> Self {
        self.fallback_window = window;
        self
    }
}

impl Default for KeywordSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextSelector for KeywordSelector {
    fn select<'a>(&self, query: &str, records: &'a [PatientRecord]) -> Vec<&'a PatientRecord> {
        let keywords: Vec<String> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matches: Vec<&PatientRecord> = records
            .iter()
            .filter(|record| {
                let haystack = record.render_text().to_lowercase();
                keywords.iter().any(|keyword| haystack.contains(keyword))
            })
            .collect();

        if matches.is_empty() {
            let start = records.len().saturating_sub(self.fallback_window);
            debug!(
                "no keyword match for query, falling back to {} most recent records",
                records.len() - start
            );
            return records[start..].iter().collect();
        }

        debug!("selected {} records by keyword match", matches.len());
        matches
    }
}
