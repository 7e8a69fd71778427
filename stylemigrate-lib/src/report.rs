use std::fmt;

/// One row of a change report: `from` was replaced by `to`, `count` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub from: String,
    pub to: String,
    pub count: usize,
}

impl Change {
    pub fn new(from: &str, to: &str, count: usize) -> Self {
        Change {
            from: from.to_string(),
            to: to.to_string(),
            count,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:30} → {:25} ({:3}x)", self.from, self.to, self.count)
    }
}

pub fn total(changes: &[Change]) -> usize {
    changes.iter().map(|c| c.count).sum()
}

/// Changes sorted by the old token, the order reports list them in.
pub fn sorted(changes: &[Change]) -> Vec<&Change> {
    let mut rows: Vec<&Change> = changes.iter().collect();
    rows.sort_by(|a, b| a.from.cmp(&b.from));
    rows
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

/// Human-readable console report of one migration step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
    pub summary: Vec<String>,
    /// Width of the `=` rules framing the report.
    pub width: usize,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Report {
            title: title.into(),
            sections: Vec::new(),
            summary: Vec::new(),
            width: 70,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Starts a numbered section and returns it for filling in.
    pub fn section(&mut self, title: impl Into<String>) -> &mut Section {
        let number = self.sections.len() + 1;
        self.sections.push(Section {
            title: format!("{}. {}", number, title.into()),
            lines: Vec::new(),
        });
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    pub fn summary_line(&mut self, line: impl Into<String>) {
        self.summary.push(line.into());
    }
}

impl Section {
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Lists changes sorted by old token, at most `limit` of them.
    pub fn changes(&mut self, changes: &[Change], limit: Option<usize>) -> &mut Self {
        let rows = sorted(changes);
        let shown = limit.unwrap_or(rows.len()).min(rows.len());
        for change in &rows[..shown] {
            self.lines.push(change.to_string());
        }
        if rows.len() > shown {
            self.lines.push(format!("... and {} more", rows.len() - shown));
        }
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(self.width);
        writeln!(f, "{}", rule)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", rule)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            for line in &section.lines {
                writeln!(f, "   {}", line)?;
            }
        }
        if !self.summary.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", rule)?;
            for line in &self.summary {
                writeln!(f, "{}", line)?;
            }
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_change_row_alignment() {
        let row = Change::new("pull-left", "float-start", 7).to_string();
        assert_eq!(
            row,
            format!("{}{} → {}{} (  7x)", "pull-left", " ".repeat(21), "float-start", " ".repeat(14))
        );
    }

    #[test]
    fn test_section_limit() {
        let changes: Vec<Change> = (0..4).map(|i| Change::new(&format!("c{i}"), "x", 1)).collect();
        let mut report = Report::new("t");
        report.section("Spacing").changes(&changes, Some(2));
        assert_eq!(report.sections[0].title, "1. Spacing");
        assert_eq!(report.sections[0].lines.len(), 3);
        assert_eq!(report.sections[0].lines[2], "... and 2 more");
    }

    #[test]
    fn test_display_frames_title_and_summary() {
        let mut report = Report::new("Title").with_width(5);
        report.section("Step").line("done");
        report.summary_line("Complete");
        assert_eq!(
            report.to_string(),
            "=====\nTitle\n=====\n\n1. Step\n   done\n\n=====\nComplete\n=====\n"
        );
    }

    #[test]
    fn test_totals_and_order() {
        let changes = vec![Change::new("b", "x", 2), Change::new("a", "y", 3)];
        assert_eq!(total(&changes), 5);
        let order: Vec<&str> = sorted(&changes).iter().map(|c| c.from.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }
}
