// src/style/stylesheet.rs: a borrowed, byte-exact view over a stylesheet.
use std::ops::Range;

/// A stylesheet as an ordered list of rule blocks over the untouched source.
///
/// Blocks only borrow from `source`, so anything that is not explicitly
/// removed serializes back byte for byte.
#[derive(Debug, Clone)]
pub struct Stylesheet<'a> {
    source: &'a str,
    pub blocks: Vec<RuleBlock<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock<'a> {
    /// Everything between the previous block boundary and `{`, trimmed.
    pub header: &'a str,
    /// Comma-separated parts of the header, e.g. `.a` and `.b` for `.a, .b`.
    pub selectors: Vec<Selector<'a>>,
    /// Text between the braces.
    pub body: &'a str,
    /// 0 for top-level blocks, 1 inside an `@media` block, and so on.
    pub depth: usize,
    /// True when the body holds blocks of its own.
    pub nested: bool,
    /// From the header's first byte through the closing brace and any
    /// whitespace that follows it.
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

struct OpenBlock {
    header_start: Option<usize>,
    brace: usize,
    nested: bool,
}

impl<'a> Stylesheet<'a> {
    /// Scans `source` for brace-delimited rule blocks.
    ///
    /// `/* ... */` comments are skipped. Braces inside strings are not
    /// understood, and unterminated blocks are dropped from the list.
    pub fn parse(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut blocks = Vec::new();
        let mut open: Vec<OpenBlock> = Vec::new();
        let mut header_start: Option<usize> = None;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    i = source[i + 2..]
                        .find("*/")
                        .map_or(bytes.len(), |end| i + 2 + end + 2);
                    continue;
                }
                b'{' => {
                    if let Some(parent) = open.last_mut() {
                        parent.nested = true;
                    }
                    open.push(OpenBlock {
                        header_start: header_start.take(),
                        brace: i,
                        nested: false,
                    });
                }
                b'}' => {
                    if let Some(block) = open.pop() {
                        if let Some(start) = block.header_start {
                            let mut end = i + 1;
                            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                                end += 1;
                            }
                            let header = source[start..block.brace].trim_end();
                            blocks.push(RuleBlock {
                                header,
                                selectors: split_selectors(source, start, start + header.len()),
                                body: &source[block.brace + 1..i],
                                depth: open.len(),
                                nested: block.nested,
                                span: start..end,
                            });
                        }
                    }
                    header_start = None;
                }
                b';' => header_start = None,
                b if b.is_ascii_whitespace() => {}
                _ => {
                    if header_start.is_none() {
                        header_start = Some(i);
                    }
                }
            }
            i += 1;
        }

        // Inner blocks close first; keep document order.
        blocks.sort_by_key(|block| block.span.start);
        Stylesheet { source, blocks }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Top-level blocks with no nested blocks, the only ones passes may delete.
    pub fn top_level(&self) -> impl Iterator<Item = &RuleBlock<'a>> {
        self.blocks
            .iter()
            .filter(|block| block.depth == 0 && !block.nested)
    }

    /// Serializes the source with the given byte ranges cut out.
    pub fn without(&self, ranges: &[Range<usize>]) -> String {
        splice(self.source, ranges.iter().map(|r| (r.clone(), "")))
    }
}

impl RuleBlock<'_> {
    /// Byte range that drops `selectors[index]` together with one adjoining
    /// comma, leaving a well-formed group. `None` for a lone selector.
    pub fn selector_removal(&self, index: usize) -> Option<Range<usize>> {
        if self.selectors.len() < 2 || index >= self.selectors.len() {
            return None;
        }
        let selector = &self.selectors[index];
        match self.selectors.get(index + 1) {
            Some(next) => Some(selector.span.start..next.span.start),
            None => Some(self.selectors[index - 1].span.end..selector.span.end),
        }
    }
}

/// Splits a selector list on commas that are not inside `()` or `[]`.
fn split_selectors(source: &str, start: usize, end: usize) -> Vec<Selector<'_>> {
    let mut selectors = Vec::new();
    let mut depth = 0usize;
    let mut part_start = start;

    for (offset, b) in source.as_bytes()[start..end].iter().enumerate() {
        match b {
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                push_selector(source, part_start..start + offset, &mut selectors);
                part_start = start + offset + 1;
            }
            _ => {}
        }
    }
    push_selector(source, part_start..end, &mut selectors);
    selectors
}

fn push_selector<'a>(source: &'a str, range: Range<usize>, selectors: &mut Vec<Selector<'a>>) {
    let raw = &source[range.clone()];
    let text = raw.trim();
    if text.is_empty() {
        return;
    }
    let start = range.start + (raw.len() - raw.trim_start().len());
    let span = start..start + text.len();
    selectors.push(Selector {
        text: &source[span.clone()],
        span,
    });
}

/// Applies non-overlapping `(range, replacement)` edits to `source`.
pub fn splice<'r, I>(source: &str, edits: I) -> String
where
    I: IntoIterator<Item = (Range<usize>, &'r str)>,
{
    let mut edits: Vec<_> = edits.into_iter().collect();
    edits.sort_by_key(|(range, _)| range.start);

    let mut output = String::with_capacity(source.len());
    let mut last = 0;
    for (range, replacement) in edits {
        if range.start < last {
            continue;
        }
        output.push_str(&source[last..range.start]);
        output.push_str(replacement);
        last = range.end;
    }
    output.push_str(&source[last..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blocks_and_spans() {
        let css = ".a { color: red; }\n\n.b, .c {\n  margin: 0;\n}\n";
        let sheet = Stylesheet::parse(css);
        assert_eq!(sheet.blocks.len(), 2);

        let a = &sheet.blocks[0];
        assert_eq!(a.header, ".a");
        assert_eq!(a.body, " color: red; ");
        assert_eq!(&css[a.span.clone()], ".a { color: red; }\n\n");

        let group = &sheet.blocks[1];
        let texts: Vec<&str> = group.selectors.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec![".b", ".c"]);
        assert_eq!(group.header, ".b, .c");
    }

    #[test]
    fn test_comments_are_skipped() {
        let css = "/* Buttons; { not a block } */\n.btn-x { padding: 0; }";
        let sheet = Stylesheet::parse(css);
        assert_eq!(sheet.blocks.len(), 1);
        assert_eq!(sheet.blocks[0].header, ".btn-x");
        assert_eq!(&css[sheet.blocks[0].span.clone()], ".btn-x { padding: 0; }");
    }

    #[test]
    fn test_nested_blocks() {
        let css = "@media (max-width: 600px) {\n  .a { color: red; }\n}\n.b { color: blue; }";
        let sheet = Stylesheet::parse(css);
        let headers: Vec<(&str, usize, bool)> = sheet
            .blocks
            .iter()
            .map(|b| (b.header, b.depth, b.nested))
            .collect();
        assert_eq!(
            headers,
            vec![
                ("@media (max-width: 600px)", 0, true),
                (".a", 1, false),
                (".b", 0, false),
            ]
        );
        let top: Vec<&str> = sheet.top_level().map(|b| b.header).collect();
        assert_eq!(top, vec![".b"]);
    }

    #[test]
    fn test_unclosed_block_is_dropped() {
        let sheet = Stylesheet::parse(".a { color: red; }\n.b { color: blue;");
        assert_eq!(sheet.blocks.len(), 1);
        assert_eq!(sheet.blocks[0].header, ".a");
    }

    #[test]
    fn test_attribute_selector_commas() {
        let sheet = Stylesheet::parse("a[title=\"x,y\"], .b { color: red; }");
        let texts: Vec<&str> = sheet.blocks[0].selectors.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["a[title=\"x,y\"]", ".b"]);
    }

    #[test]
    fn test_without_round_trips_the_rest() {
        let css = "body { margin: 0; }\n.a { color: red; }\n.b { color: blue; }\n";
        let sheet = Stylesheet::parse(css);
        assert_eq!(sheet.without(&[]), css);
        let a = sheet.blocks[1].span.clone();
        assert_eq!(sheet.without(&[a]), "body { margin: 0; }\n.b { color: blue; }\n");
    }

    #[test]
    fn test_selector_removal_keeps_group_well_formed() {
        let css = ".a,\n.b, .c { margin: 0; }";
        let sheet = Stylesheet::parse(css);
        let block = &sheet.blocks[0];

        let first = block.selector_removal(0).unwrap();
        assert_eq!(splice(css, [(first, "")]), ".b, .c { margin: 0; }");

        let last = block.selector_removal(2).unwrap();
        assert_eq!(splice(css, [(last, "")]), ".a,\n.b { margin: 0; }");
    }
}
