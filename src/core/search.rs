use crate::core::{Document, Feedback, Notice, Notifier, TextField};

/// Trimmed, lower-cased query, or `None` when nothing was typed.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim().to_lowercase();
    (!query.is_empty()).then_some(query)
}

/// Presence check of `raw_query` in `page_text`, ignoring case.
///
/// The page text is only consulted for a non-empty query.
pub fn search_text(raw_query: &str, page_text: impl FnOnce() -> String) -> Notice {
    let Some(query) = normalize_query(raw_query) else {
        return Notice::EmptySearch;
    };

    if page_text().to_lowercase().contains(&query) {
        Notice::Found { query }
    } else {
        Notice::NotFound { query }
    }
}

pub fn handle_search<D, F, N>(page: &D, input: &F, feedback: &Feedback<'_, N>) -> Notice
where
    D: Document,
    F: TextField,
    N: Notifier,
{
    let notice = search_text(&input.value(), || page.body_text());
    tracing::debug!(?notice, "search finished");
    feedback.show(&notice);
    notice
}
