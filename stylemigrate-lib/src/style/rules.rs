//! Block-level edits used by the cleanup, consolidation and pruning passes.
//!
//! Only top-level blocks whose whole header is one plain class selector are
//! ever deleted. Selector groups, compound selectors and anything nested in
//! an at-rule stay in place.

use super::selector::{classify, single_class, SelectorKind};
use super::stylesheet::{splice, Stylesheet};

/// Removes every top-level `.name { ... }` block for which
/// `should_remove(name, body)` returns true.
///
/// Returns the new text and the class name of each removed block, in
/// document order (a name repeats when several of its blocks go).
pub fn remove_class_blocks<F>(css: &str, mut should_remove: F) -> (String, Vec<String>)
where
    F: FnMut(&str, &str) -> bool,
{
    let sheet = Stylesheet::parse(css);
    let mut spans = Vec::new();
    let mut removed = Vec::new();

    for block in sheet.top_level() {
        let Some(name) = single_class(block.header) else {
            continue;
        };
        if should_remove(name, block.body) {
            log::debug!("removing rule block {}", block.header);
            spans.push(block.span.clone());
            removed.push(name.to_string());
        }
    }

    if spans.is_empty() {
        return (css.to_string(), removed);
    }
    (sheet.without(&spans), removed)
}

/// Drops the `.name` entry from every top-level comma-joined selector group,
/// returning the new text and the number of groups edited.
pub fn drop_from_groups(css: &str, name: &str) -> (String, usize) {
    let sheet = Stylesheet::parse(css);
    let mut edits = Vec::new();

    for block in sheet.top_level() {
        if block.selectors.len() < 2 {
            continue;
        }
        let position = block
            .selectors
            .iter()
            .position(|s| classify(s.text) == SelectorKind::Class(name));
        if let Some(range) = position.and_then(|index| block.selector_removal(index)) {
            log::debug!("dropping .{} from group {}", name, block.header);
            edits.push((range, ""));
        }
    }

    let count = edits.len();
    if count == 0 {
        return (css.to_string(), 0);
    }
    (splice(sheet.source(), edits), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_remove_by_name() {
        let css = ".text-lg { font-size: 18px; }\n\n.card .text-lg { color: red; }\n.keep { color: blue; }\n";
        let (out, removed) = remove_class_blocks(css, |name, _| name == "text-lg");
        assert_eq!(out, ".card .text-lg { color: red; }\n.keep { color: blue; }\n");
        assert_eq!(removed, vec!["text-lg".to_string()]);
    }

    #[test]
    fn test_remove_skips_at_rules() {
        let css = "@media print {\n  .x { display: none; }\n}\n.x { color: red; }\n";
        let (out, removed) = remove_class_blocks(css, |name, _| name == "x");
        assert_eq!(out, "@media print {\n  .x { display: none; }\n}\n");
        assert_eq!(removed.len(), 1);
    }

    #[test]
    fn test_remove_sees_body() {
        let css = ".d-block { display: block; }\n.d-flex { display: flex; gap: 1rem; }\n";
        let (out, removed) =
            remove_class_blocks(css, |_, body| body.trim() == "display: block;");
        assert_eq!(out, ".d-flex { display: flex; gap: 1rem; }\n");
        assert_eq!(removed, vec!["d-block".to_string()]);
    }

    #[test]
    fn test_drop_from_groups() {
        let css = ".btn-narrow,\n.btn-other { padding: 2px; }\n.a, .btn-narrow { margin: 0; }\n.btn-narrow-alt, .b { margin: 1px; }\n";
        let (out, edited) = drop_from_groups(css, "btn-narrow");
        assert_eq!(
            out,
            ".btn-other { padding: 2px; }\n.a { margin: 0; }\n.btn-narrow-alt, .b { margin: 1px; }\n"
        );
        assert_eq!(edited, 2);
    }
}
