use crate::report::Change;
use crate::style::prune::prune;
use crate::style::rules::{drop_from_groups, remove_class_blocks};
use crate::tables::{self, ClassGroup};
use crate::text::{collapse_blank_lines, line_count, replace_class_token};
use std::collections::BTreeSet;

/// Changes made for one [`ClassGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupChanges {
    pub label: &'static str,
    pub changes: Vec<Change>,
}

/// Result of folding custom classes into Bootstrap 5 utilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consolidation {
    pub html: String,
    pub css: String,
    pub groups: Vec<GroupChanges>,
    /// Classes deleted by the final reachability pass.
    pub pruned: BTreeSet<String>,
    pub css_lines_before: usize,
    pub css_lines_after: usize,
}

impl Consolidation {
    pub fn total_changes(&self) -> usize {
        self.groups
            .iter()
            .map(|group| crate::report::total(&group.changes))
            .sum()
    }
}

/// Replaces over-specific custom classes in the markup with Bootstrap 5
/// utilities, deletes their now-dead rules, then prunes every class the
/// markup no longer mentions.
pub fn consolidate(html: &str, css: &str) -> Consolidation {
    let css_lines_before = line_count(css);
    let mut html = html.to_string();
    let mut css = css.to_string();
    let mut groups = Vec::new();

    for group in tables::CONSOLIDATIONS {
        let changes = fold_group(group, &mut html, &mut css);
        log::info!("{} classes: {} renamed", group.label, changes.len());
        groups.push(GroupChanges {
            label: group.label,
            changes,
        });
    }

    let css = collapse_blank_lines(&css, 2);
    let pruned = prune(&css, &html);
    let css_lines_after = line_count(&pruned.stylesheet);

    Consolidation {
        html,
        css: pruned.stylesheet,
        groups,
        pruned: pruned.removed,
        css_lines_before,
        css_lines_after,
    }
}

/// Applies one group. Stylesheet rules are only touched for classes the
/// markup actually used.
fn fold_group(group: &ClassGroup, html: &mut String, css: &mut String) -> Vec<Change> {
    let mut changes = Vec::new();

    for &(old, new) in group.renames {
        let (renamed, count) = replace_class_token(html, old, new);
        if count == 0 {
            continue;
        }
        *html = renamed;
        changes.push(Change::new(old, new, count));

        let (without_rules, removed) = remove_class_blocks(css, |name, _| name == old);
        *css = without_rules;
        if group.ungroup {
            let (ungrouped, edited) = drop_from_groups(css, old);
            *css = ungrouped;
            log::debug!(".{}: {} block(s) removed, {} group(s) edited", old, removed.len(), edited);
        } else {
            log::debug!(".{}: {} block(s) removed", old, removed.len());
        }
    }
    changes
}
