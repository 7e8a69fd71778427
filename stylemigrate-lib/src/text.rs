//! Substitution primitives shared by every migration pass.
//!
//! Class names are matched as whole *class tokens*: an occurrence only counts
//! when the characters on either side cannot be part of a class name. This is
//! stricter than a regex `\b`, which treats `-` as a boundary and would find
//! `btn` inside `btn-large`.

/// True for characters that may appear inside a class name.
pub fn is_class_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Iterator over the byte offsets of whole-token occurrences of a class name.
#[derive(Debug, Clone)]
pub struct ClassTokens<'h, 't> {
    haystack: &'h str,
    token: &'t str,
    pos: usize,
}

impl<'h, 't> ClassTokens<'h, 't> {
    pub fn new(haystack: &'h str, token: &'t str) -> Self {
        ClassTokens {
            haystack,
            token,
            pos: 0,
        }
    }
}

impl Iterator for ClassTokens<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.token.is_empty() {
            return None;
        }

        while let Some(offset) = self.haystack[self.pos..].find(self.token) {
            let start = self.pos + offset;
            let end = start + self.token.len();

            let open = self.haystack[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !is_class_char(c));
            let close = self.haystack[end..]
                .chars()
                .next()
                .map_or(true, |c| !is_class_char(c));

            if open && close {
                self.pos = end;
                return Some(start);
            }

            // Step a single char so overlapping candidates are still seen.
            let step = self.haystack[start..].chars().next().map_or(1, char::len_utf8);
            self.pos = start + step;
        }

        self.pos = self.haystack.len();
        None
    }
}

pub fn contains_class_token(haystack: &str, token: &str) -> bool {
    ClassTokens::new(haystack, token).next().is_some()
}

pub fn count_class_token(haystack: &str, token: &str) -> usize {
    ClassTokens::new(haystack, token).count()
}

/// Replaces every whole-token occurrence of `token`, returning the new text
/// and the number of replacements.
pub fn replace_class_token(haystack: &str, token: &str, replacement: &str) -> (String, usize) {
    let mut output = String::with_capacity(haystack.len());
    let mut last = 0;
    let mut count = 0;

    for start in ClassTokens::new(haystack, token) {
        output.push_str(&haystack[last..start]);
        output.push_str(replacement);
        last = start + token.len();
        count += 1;
    }
    output.push_str(&haystack[last..]);

    (output, count)
}

/// Plain substring replacement with a match count.
pub fn replace_literal(haystack: &str, from: &str, to: &str) -> (String, usize) {
    if from.is_empty() {
        return (haystack.to_string(), 0);
    }
    let count = haystack.matches(from).count();
    if count == 0 {
        return (haystack.to_string(), 0);
    }
    (haystack.replace(from, to), count)
}

/// Shrinks every run of more than `max_newlines` consecutive `\n` down to
/// exactly `max_newlines`.
pub fn collapse_blank_lines(text: &str, max_newlines: usize) -> String {
    let mut output = String::with_capacity(text.len());
    let mut run = 0;

    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run <= max_newlines {
                output.push(c);
            }
        } else {
            run = 0;
            output.push(c);
        }
    }
    output
}

/// Number of `\n` characters, the way the reports count lines.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_ignores_hyphenated_neighbours() {
        assert!(!contains_class_token("<a class=\"btn-large\">", "btn"));
        assert!(!contains_class_token("<a class=\"x-btn\">", "btn"));
        assert!(contains_class_token("<a class=\"btn btn-large\">", "btn"));
        assert!(contains_class_token("btn", "btn"));
    }

    #[test]
    fn test_token_is_case_sensitive() {
        assert!(!contains_class_token("class='Foo'", "foo"));
    }

    #[test]
    fn test_token_offsets() {
        let hay = "mt-5 mt-50 xmt-5 mt-5";
        let found: Vec<usize> = ClassTokens::new(hay, "mt-5").collect();
        assert_eq!(found, vec![0, 17]);
    }

    #[test]
    fn test_empty_token_never_matches() {
        assert_eq!(count_class_token("anything", ""), 0);
    }

    #[test]
    fn test_replace_class_token() {
        let (out, count) = replace_class_token(
            r#"<div class="pull-left pull-left-sm">pull-left</div>"#,
            "pull-left",
            "float-start",
        );
        assert_eq!(out, r#"<div class="float-start pull-left-sm">float-start</div>"#);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_replace_literal_counts() {
        let (out, count) = replace_literal("data-toggle=a data-toggle=b", "data-toggle=", "data-bs-toggle=");
        assert_eq!(out, "data-bs-toggle=a data-bs-toggle=b");
        assert_eq!(count, 2);

        let (out, count) = replace_literal("nothing here", "data-toggle=", "x");
        assert_eq!(out, "nothing here");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb\n\nc", 3), "a\n\n\nb\n\nc");
        assert_eq!(collapse_blank_lines("a\n\n\nb", 2), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb", 2), "a\nb");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("a\nb\n"), 2);
    }
}
