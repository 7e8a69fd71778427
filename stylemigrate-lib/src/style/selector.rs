use crate::text::is_class_char;

/// How a single selector (one entry of a comma-joined list) is treated by
/// the removal passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind<'a> {
    /// `.name` and nothing else.
    Class(&'a str),
    /// Pseudo-classes, combinators, compound or attribute selectors, tags,
    /// ids, escaped names. Never removed.
    Other,
}

/// Classifies a trimmed selector.
pub fn classify(selector: &str) -> SelectorKind<'_> {
    match selector.strip_prefix('.') {
        Some(name) if !name.is_empty() && name.chars().all(is_class_char) => {
            SelectorKind::Class(name)
        }
        _ => SelectorKind::Other,
    }
}

/// Class name of a block header consisting of exactly one plain class selector.
pub fn single_class(header: &str) -> Option<&str> {
    match classify(header.trim()) {
        SelectorKind::Class(name) => Some(name),
        SelectorKind::Other => None,
    }
}
