use crate::error::Result;
use crate::files::{read_text, write_text};
use crate::migrate::{audit, cleanup, consolidate, markup};
use crate::report::Report;
use crate::style::{prune, validate};
use std::path::Path;

/// Options shared by every step that writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute and report, but leave the files alone.
    pub dry_run: bool,
}

pub mod steps {
    use super::*;

    /// Step 1: move the markup onto Bootstrap 5 assets and class names.
    pub fn migrate_markup_file(html_path: &Path, options: RunOptions) -> Result<Report> {
        let html = read_text(html_path)?;
        let migrated = markup::migrate_markup(&html);

        let mut report = Report::new("Bootstrap 5 Migration (CDN)");
        let links = report.section("Updating Bootstrap links to CDN");
        if migrated.links.is_empty() {
            links.line("No local Bootstrap 3 assets found");
        } else {
            links.line(format!("✓ Bootstrap 5.3.3 CDN links added ({})", migrated.links.len()));
        }
        report
            .section("Migrating class names")
            .changes(&migrated.classes, None);
        report
            .section("Migrating data attributes")
            .changes(&migrated.data_attributes, None);
        report
            .section("Converting spacing utilities")
            .changes(&migrated.spacing, Some(15));

        finish_write(&mut report, html_path, &migrated.html, options)?;
        report.summary_line(format!(
            "Migration Complete: {} total changes",
            migrated.total_changes()
        ));
        Ok(report)
    }

    /// Step 2: strip utilities Bootstrap 5 ships from the stylesheet.
    pub fn cleanup_stylesheet_file(css_path: &Path, options: RunOptions) -> Result<Report> {
        let css = read_text(css_path)?;
        let cleaned = cleanup::cleanup_stylesheet(&css)?;

        let mut report = Report::new("CSS Cleanup for Bootstrap 5");
        let section = report.section("Removing redundant utilities");
        for (label, count) in &cleaned.removed {
            section.line(format!("{} utilities: {} removed", label, count));
        }
        report.section("Adding Bootstrap 5 reference note").line(if cleaned.note_inserted {
            "✓ Note inserted"
        } else {
            "Skipped (already present or no anchor)"
        });

        validate::log_check("cleaned stylesheet", &cleaned.css);
        finish_write(&mut report, css_path, &cleaned.css, options)?;

        report.summary_line(format!("Original:  {} lines", cleaned.lines_before));
        report.summary_line(format!("Final:     {} lines", cleaned.lines_after));
        report.summary_line(format!(
            "Removed:   {} lines ({:.1}% reduction)",
            cleaned.lines_before.saturating_sub(cleaned.lines_after),
            cleaned.reduction_pct()
        ));
        report.summary_line(format!(
            "Total utilities removed: {}",
            cleaned.total_removed()
        ));
        Ok(report)
    }

    /// Step 3: fold custom classes into Bootstrap 5 and prune dead rules.
    pub fn consolidate_files(
        html_path: &Path,
        css_path: &Path,
        options: RunOptions,
    ) -> Result<Report> {
        let html = read_text(html_path)?;
        let css = read_text(css_path)?;
        let done = consolidate::consolidate(&html, &css);

        let mut report = Report::new("Further Bootstrap 5 Migration").with_width(80);
        for group in &done.groups {
            report
                .section(format!("Migrating {} classes", group.label))
                .changes(&group.changes, None);
        }
        removed_section(&mut report, &done.pruned);

        validate::log_check("consolidated stylesheet", &done.css);
        finish_write(&mut report, html_path, &done.html, options)?;
        finish_write(&mut report, css_path, &done.css, options)?;

        report.summary_line(format!("Total HTML changes: {}", done.total_changes()));
        report.summary_line(format!(
            "CSS lines: {} → {} (-{})",
            done.css_lines_before,
            done.css_lines_after,
            done.css_lines_before.saturating_sub(done.css_lines_after)
        ));
        report.summary_line(format!("Unused classes removed: {}", done.pruned.len()));
        Ok(report)
    }

    /// Reachability pass on its own.
    pub fn prune_files(html_path: &Path, css_path: &Path, options: RunOptions) -> Result<Report> {
        let html = read_text(html_path)?;
        let css = read_text(css_path)?;
        let pruned = prune::prune(&css, &html);

        let mut report = Report::new("Unused CSS class removal");
        removed_section(&mut report, &pruned.removed);

        validate::log_check("pruned stylesheet", &pruned.stylesheet);
        finish_write(&mut report, css_path, &pruned.stylesheet, options)?;

        report.summary_line(format!(
            "CSS lines: {} → {}",
            crate::text::line_count(&css),
            crate::text::line_count(&pruned.stylesheet)
        ));
        report.summary_line(format!("Unused classes removed: {}", pruned.removed.len()));
        Ok(report)
    }

    /// Read-only preview of legacy classes still on elements.
    pub fn audit_markup_file(html_path: &Path) -> Result<Report> {
        let html = read_text(html_path)?;
        let audit = audit::audit_markup(&html);

        let mut report = Report::new("Legacy class audit");
        let section = report.section("Legacy classes in class attributes");
        if audit.legacy.is_empty() {
            section.line("None found");
        } else {
            section.changes(&audit.legacy, None);
        }
        if audit.quirks {
            report
                .section("Document mode")
                .line("Quirks mode: add <!DOCTYPE html>, Bootstrap 5 expects standards mode");
        }
        report.summary_line(format!(
            "{} element(s) with classes, {} distinct class name(s)",
            audit.classed_elements, audit.distinct_classes
        ));
        report.summary_line(format!(
            "Legacy occurrences: {}",
            crate::report::total(&audit.legacy)
        ));
        report.summary_line(format!("HTML parse errors: {}", audit.parse_errors));
        Ok(report)
    }

    fn removed_section(report: &mut Report, removed: &std::collections::BTreeSet<String>) {
        let section = report.section("Removing unused CSS classes");
        for class in removed.iter().take(5) {
            section.line(format!("Removed: .{}", class));
        }
        if removed.len() > 5 {
            section.line(format!("... and {} more", removed.len() - 5));
        }
        if removed.is_empty() {
            section.line("Nothing to remove");
        }
    }

    fn finish_write(
        report: &mut Report,
        path: &Path,
        content: &str,
        options: RunOptions,
    ) -> Result<()> {
        let section = report
            .sections
            .iter()
            .position(|s| s.title.ends_with("Writing updated files"));
        let index = match section {
            Some(index) => index,
            None => {
                report.section("Writing updated files");
                report.sections.len() - 1
            }
        };

        if options.dry_run {
            log::info!("dry run: not writing {}", path.display());
            report.sections[index]
                .line(format!("(dry run) {} left unchanged", path.display()));
            return Ok(());
        }

        write_text(path, content)?;
        report.sections[index].line(format!("✓ {}", path.display()));
        Ok(())
    }
}
