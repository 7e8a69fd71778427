use crate::report::Change;
use crate::tables::{self, Mapping};
use crate::text::{replace_class_token, replace_literal};

/// Result of migrating a markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupMigration {
    pub html: String,
    pub links: Vec<Change>,
    pub classes: Vec<Change>,
    pub data_attributes: Vec<Change>,
    pub spacing: Vec<Change>,
}

impl MarkupMigration {
    pub fn total_changes(&self) -> usize {
        [&self.classes, &self.data_attributes, &self.spacing]
            .into_iter()
            .map(|changes| crate::report::total(changes))
            .sum()
    }
}

/// Moves Bootstrap 3 markup onto Bootstrap 5: CDN assets, renamed classes,
/// `data-bs-*` attributes, then the spacing scale.
pub fn migrate_markup(html: &str) -> MarkupMigration {
    let (html, links) = apply(html, tables::CDN_LINKS, replace_literal);
    let (html, classes) = apply(&html, tables::CLASS_RENAMES, replace_class_token);
    let (html, data_attributes) = apply(&html, tables::DATA_ATTRIBUTES, replace_literal);
    let (html, spacing) = apply(&html, tables::SPACING_SCALE, replace_class_token);

    MarkupMigration {
        html,
        links,
        classes,
        data_attributes,
        spacing,
    }
}

/// Runs `table` through `replace` in order, keeping the non-zero counts.
fn apply<F>(text: &str, table: &[Mapping], replace: F) -> (String, Vec<Change>)
where
    F: Fn(&str, &str, &str) -> (String, usize),
{
    let mut current = text.to_string();
    let mut changes = Vec::new();

    for &(from, to) in table {
        let (next, count) = replace(&current, from, to);
        if count > 0 {
            log::debug!("{} -> {} ({}x)", from, to, count);
            current = next;
            changes.push(Change::new(from, to, count));
        }
    }
    (current, changes)
}
