//! Unused-selector reachability pass.
//!
//! A top-level rule block whose header is exactly one plain class selector is
//! deleted when that class name never appears as a class token anywhere in
//! the markup text. Everything else (selector groups, pseudo-classes,
//! combinators, compound selectors, at-rule contents) is kept.
//!
//! Reachability is textual: a name mentioned only in a comment or a script
//! still counts as used, and class names assembled at runtime are invisible.

use super::rules::remove_class_blocks;
use crate::text::contains_class_token;
use std::collections::{BTreeSet, HashMap};

/// Output of [`prune`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pruned {
    pub stylesheet: String,
    pub removed: BTreeSet<String>,
}

/// Deletes the rule blocks of class selectors the markup never references.
pub fn prune(stylesheet_text: &str, markup_text: &str) -> Pruned {
    let mut reachable: HashMap<String, bool> = HashMap::new();

    let (stylesheet, removed) = remove_class_blocks(stylesheet_text, |name, _| {
        let used = *reachable
            .entry(name.to_string())
            .or_insert_with(|| contains_class_token(markup_text, name));
        !used
    });

    let removed: BTreeSet<String> = removed.into_iter().collect();
    log::info!("pruned {} unreferenced class selector(s)", removed.len());

    Pruned {
        stylesheet,
        removed,
    }
}
