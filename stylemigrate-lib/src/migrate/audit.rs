use crate::parser::class_index::ClassIndex;
use crate::parser::markup::parse_markup;
use crate::report::Change;
use crate::tables;
use html5ever::interface::QuirksMode;

/// Legacy classes still carried by elements, read from `class` attributes
/// only. `count` is the number of elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audit {
    pub legacy: Vec<Change>,
    pub classed_elements: usize,
    pub distinct_classes: usize,
    /// The document lacks a standards-mode doctype, which Bootstrap 5 needs.
    pub quirks: bool,
    pub parse_errors: usize,
}

pub fn audit_markup(html: &str) -> Audit {
    let document = parse_markup(html);
    let index = ClassIndex::build(&document);
    let mut legacy: Vec<Change> = Vec::new();

    for (old, new) in tables::legacy_classes() {
        let count = index.count(old);
        if count > 0 && !legacy.iter().any(|c| c.from == old) {
            legacy.push(Change::new(old, new, count));
        }
    }
    log::info!("{} legacy class name(s) still in use", legacy.len());

    Audit {
        legacy,
        classed_elements: index.classed_elements,
        distinct_classes: index.class_counts.len(),
        quirks: document.quirks_mode != QuirksMode::NoQuirks,
        parse_errors: document.parse_errors,
    }
}
