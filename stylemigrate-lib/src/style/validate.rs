use lightningcss::error::{Error as LcssError, ParserError};
use lightningcss::rules::CssRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};

/// Summary of a successful sanity parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCounts {
    pub style_rules: usize,
    pub other_rules: usize,
}

/// Parses rewritten CSS with LightningCSS to catch blocks a textual pass may
/// have broken. The rewrite is never rejected; callers only log the outcome.
pub fn check(css_text: &str) -> Result<RuleCounts, ParserError<'_>> {
    let sheet = LightningStyleSheet::parse(css_text, ParserOptions::default())
        .map_err(|e: LcssError<ParserError<'_>>| e.kind)?;

    let mut counts = RuleCounts {
        style_rules: 0,
        other_rules: 0,
    };
    for rule in &sheet.rules.0 {
        match rule {
            CssRule::Style(_) => counts.style_rules += 1,
            _ => counts.other_rules += 1,
        }
    }
    Ok(counts)
}

/// Runs [`check`] and logs the result under `label`.
pub fn log_check(label: &str, css_text: &str) -> Option<RuleCounts> {
    match check(css_text) {
        Ok(counts) => {
            log::debug!(
                "{}: {} style rule(s), {} other rule(s)",
                label,
                counts.style_rules,
                counts.other_rules
            );
            Some(counts)
        }
        Err(kind) => {
            log::warn!("{} no longer parses cleanly: {}", label, kind);
            None
        }
    }
}
