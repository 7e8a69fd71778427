use std::collections::BTreeMap;

use super::markup::markup_tree::{Document, Handle};
use super::markup::parse_markup;

/// Class-attribute usage across a markup document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassIndex {
    /// Maps a class name to the number of elements carrying it.
    pub class_counts: BTreeMap<String, usize>,
    /// Number of elements that have a `class` attribute at all.
    pub classed_elements: usize,
}

impl ClassIndex {
    /// Build the index for the entire document.
    pub fn build(document: &Document) -> Self {
        let mut index = ClassIndex::default();
        Self::traverse(&document.root, &mut index);
        index
    }

    pub fn from_markup(html_content: &str) -> Self {
        Self::build(&parse_markup(html_content))
    }

    /// Number of elements whose `class` attribute lists `class_name`.
    pub fn count(&self, class_name: &str) -> usize {
        self.class_counts.get(class_name).copied().unwrap_or(0)
    }

    fn traverse(node: &Handle, index: &mut ClassIndex) {
        let node = node.borrow();
        if let Some(class_attr) = node.attribute("class") {
            index.classed_elements += 1;
            // A class repeated on one element still counts that element once.
            let mut seen: Vec<&str> = Vec::new();
            for class in class_attr.split_whitespace() {
                if !seen.contains(&class) {
                    seen.push(class);
                    *index.class_counts.entry(class.to_string()).or_default() += 1;
                }
            }
        }
        for child in &node.children {
            Self::traverse(child, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_elements_per_class() {
        let index = ClassIndex::from_markup(
            r#"<div class="row pull-left"><span class="pull-left pull-left">x</span><p>pull-left</p></div>"#,
        );
        assert_eq!(index.count("pull-left"), 2);
        assert_eq!(index.count("row"), 1);
        assert_eq!(index.classed_elements, 2);
    }

    #[test]
    fn test_ignores_comments_and_scripts() {
        let index = ClassIndex::from_markup(
            "<!-- <div class=\"hidden\"> --><script>var c = 'class=\"hidden\"';</script>",
        );
        assert_eq!(index.count("hidden"), 0);
    }
}
