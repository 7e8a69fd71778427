use crate::error::Result;
use crate::style::rules::remove_class_blocks;
use crate::tables::{self, UtilityCategory};
use crate::text::{collapse_blank_lines, line_count};
use regex::Regex;

/// Result of removing redundant utilities from a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleanup {
    pub css: String,
    /// Removed block count per utility category, in table order.
    pub removed: Vec<(&'static str, usize)>,
    pub note_inserted: bool,
    pub lines_before: usize,
    pub lines_after: usize,
}

impl Cleanup {
    pub fn total_removed(&self) -> usize {
        self.removed.iter().map(|(_, count)| count).sum()
    }

    /// Percentage of lines removed, 0 for an empty input.
    pub fn reduction_pct(&self) -> f64 {
        if self.lines_before == 0 {
            return 0.0;
        }
        let removed = self.lines_before as f64 - self.lines_after as f64;
        removed / self.lines_before as f64 * 100.0
    }
}

/// A utility rule with its patterns compiled and anchored.
struct CompiledRule {
    class: Regex,
    body: Option<Regex>,
}

impl CompiledRule {
    fn matches(&self, name: &str, body: &str) -> bool {
        self.class.is_match(name) && self.body.as_ref().map_or(true, |re| re.is_match(body))
    }
}

fn compile(category: &UtilityCategory) -> Result<Vec<CompiledRule>> {
    category
        .rules
        .iter()
        .map(|rule| -> Result<CompiledRule> {
            Ok(CompiledRule {
                class: Regex::new(&format!("^(?:{})$", rule.class))?,
                body: rule
                    .body
                    .map(|body| Regex::new(&format!(r"^\s*(?:{})\s*$", body)))
                    .transpose()?,
            })
        })
        .collect()
}

/// Drops stylesheet utilities Bootstrap 5 already provides, adds the
/// reference note and tidies blank lines.
pub fn cleanup_stylesheet(css: &str) -> Result<Cleanup> {
    let lines_before = line_count(css);
    let mut current = css.to_string();
    let mut removed = Vec::new();

    for category in tables::REDUNDANT_UTILITIES {
        let rules = compile(category)?;
        let (next, gone) = remove_class_blocks(&current, |name, body| {
            rules.iter().any(|rule| rule.matches(name, body))
        });
        log::info!("{} utilities: {} removed", category.label, gone.len());
        removed.push((category.label, gone.len()));
        current = next;
    }

    let (with_note, note_inserted) = insert_note(&current);
    let css = collapse_blank_lines(&with_note, 3);
    let lines_after = line_count(&css);

    Ok(Cleanup {
        css,
        removed,
        note_inserted,
        lines_before,
        lines_after,
    })
}

/// Puts the Bootstrap 5 reference note in front of the first
/// `/* Display & Visibility */` section, once.
pub fn insert_note(css: &str) -> (String, bool) {
    if css.contains(tables::NOTE_HEADING) {
        return (css.to_string(), false);
    }
    match css.find(tables::NOTE_ANCHOR) {
        Some(at) => {
            let mut output = String::with_capacity(css.len() + tables::FRAMEWORK_NOTE.len() + 1);
            output.push_str(&css[..at]);
            output.push_str(tables::FRAMEWORK_NOTE);
            output.push('\n');
            output.push_str(&css[at..]);
            (output, true)
        }
        None => (css.to_string(), false),
    }
}
