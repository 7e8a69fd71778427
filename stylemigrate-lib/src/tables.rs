//! Migration data: every old token and its Bootstrap 5 replacement.
//!
//! Tables are applied in the order written, so an entry may rely on the ones
//! above it having run already.

/// `(from, to)` pair.
pub type Mapping = (&'static str, &'static str);

/// Local Bootstrap 3 assets swapped for the Bootstrap 5.3.3 CDN bundle.
pub const CDN_LINKS: &[Mapping] = &[
    (
        r#"<link href="css/bootstrap.min.css" rel="stylesheet">"#,
        r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH" crossorigin="anonymous">"#,
    ),
    (
        r#"<script src="js/bootstrap.min.js"></script>"#,
        r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js" integrity="sha384-YvpcrYf0tY3lHB60NNkmXc5s9fDVZLESaAA55NDzOxhy9GkcIdslK1eN7N6jIeHz" crossorigin="anonymous"></script>"#,
    ),
];

/// Bootstrap 3 class names with a direct Bootstrap 5 equivalent.
pub const CLASS_RENAMES: &[Mapping] = &[
    // start/end instead of left/right for RTL support
    ("pull-left", "float-start"),
    ("pull-right", "float-end"),
    ("hidden", "d-none"),
    ("text-left", "text-start"),
    ("text-right", "text-end"),
    ("btn-default", "btn-secondary"),
    ("btn-xs", "btn-sm"),
    ("control-label", "form-label"),
    ("help-block", "form-text"),
    ("input-group-addon", "input-group-text"),
];

/// JavaScript plugin attributes, now namespaced under `data-bs-`.
pub const DATA_ATTRIBUTES: &[Mapping] = &[
    ("data-toggle=", "data-bs-toggle="),
    ("data-target=", "data-bs-target="),
    ("data-dismiss=", "data-bs-dismiss="),
    ("data-parent=", "data-bs-parent="),
    ("data-slide=", "data-bs-slide="),
    ("data-slide-to=", "data-bs-slide-to="),
];

/// Custom pixel spacing classes mapped onto the Bootstrap 5 scale
/// (0, .25rem, .5rem, 1rem, 1.5rem, 3rem).
pub const SPACING_SCALE: &[Mapping] = &[
    ("mt-5", "mt-2"),
    ("mt-10", "mt-3"),
    ("mt-15", "mt-4"),
    ("mt-20", "mt-4"),
    ("mb-4", "mb-2"),
    ("mb-5", "mb-2"),
    ("mb-6", "mb-2"),
    ("mb-8", "mb-3"),
    ("mb-10", "mb-3"),
    ("mb-15", "mb-4"),
    ("ml-8", "ms-3"),
    ("ml-10", "ms-3"),
    ("mr-10", "me-3"),
    ("mr-15", "me-4"),
    ("mx-10", "mx-3"),
    ("my-6", "my-2"),
    ("p-2", "p-1"),
    ("p-4", "p-2"),
    ("p-6", "p-2"),
    ("p-8", "p-3"),
    ("p-10", "p-3"),
    ("pt-4", "pt-2"),
    ("pt-5", "pt-2"),
    ("pt-6", "pt-2"),
    ("pt-10", "pt-3"),
    ("pt-15", "pt-4"),
    ("pb-10", "pb-3"),
    ("pb-15", "pb-4"),
    ("pl-6", "ps-2"),
    ("pl-8", "ps-3"),
    ("pl-20", "ps-4"),
    ("pr-6", "pe-2"),
    ("pr-20", "pe-4"),
    ("px-20", "px-4"),
    ("py-6", "py-2"),
];

/// One removable utility: a regex over the class name and, optionally, one
/// over the declaration body. Both are anchored when compiled.
#[derive(Debug, Clone, Copy)]
pub struct UtilityRule {
    pub class: &'static str,
    pub body: Option<&'static str>,
}

const fn any(class: &'static str) -> UtilityRule {
    UtilityRule { class, body: None }
}

const fn exact(class: &'static str, body: &'static str) -> UtilityRule {
    UtilityRule {
        class,
        body: Some(body),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UtilityCategory {
    pub label: &'static str,
    pub rules: &'static [UtilityRule],
}

/// Hand-written utilities that Bootstrap 5 now ships. `.d-inline` is kept on
/// purpose: it is heavily used and identical in Bootstrap 5 anyway.
pub const REDUNDANT_UTILITIES: &[UtilityCategory] = &[
    UtilityCategory {
        label: "Spacing",
        rules: &[any(r"m[tblrxy]?-\d+"), any(r"p[tblrxy]?-\d+")],
    },
    UtilityCategory {
        label: "Display",
        rules: &[
            exact("d-block", r"display:\s*block;"),
            exact("d-inline-block", r"display:\s*inline-block;"),
            exact("d-flex", r"display:\s*flex;"),
            exact("d-none", r"display:\s*none;"),
        ],
    },
    UtilityCategory {
        label: "Text",
        rules: &[
            any(r"text-(?:start|center|end|left|right)"),
            any(r"text-(?:uppercase|lowercase|capitalize)"),
            any(r"text-muted"),
        ],
    },
    UtilityCategory {
        label: "Flex",
        rules: &[
            any(r"flex-(?:row|column|wrap|nowrap)"),
            any(r"justify-(?:start|center|end|between|around)"),
            any(r"align-(?:start|center|end|stretch)"),
            any(r"align-items-center"),
            any(r"align-center"),
        ],
    },
    UtilityCategory {
        label: "Sizing",
        rules: &[
            any(r"w-(?:25|50|75|100)pct"),
            exact("w-auto", r"width:\s*auto;"),
            exact("w-full", r"width:\s*100%;"),
            any(r"h-(?:25|50|75|100)"),
        ],
    },
    UtilityCategory {
        label: "Border",
        rules: &[any(r"border-0"), any(r"rounded"), any(r"rounded-(?:sm|md|lg)")],
    },
    UtilityCategory {
        label: "Color",
        rules: &[
            exact("bg-white", r"background-color:\s*white;"),
            exact("text-white", r"color:\s*white;"),
            exact("text-black", r"color:\s*black;"),
        ],
    },
];

/// Custom classes folded into Bootstrap 5 utilities during consolidation.
#[derive(Debug, Clone, Copy)]
pub struct ClassGroup {
    pub label: &'static str,
    pub renames: &'static [Mapping],
    /// Also drop the old selector from comma-joined groups.
    pub ungroup: bool,
}

pub const CONSOLIDATIONS: &[ClassGroup] = &[
    ClassGroup {
        label: "typography",
        renames: &[
            ("text-lg-bold", "fs-5 fw-bold"),
            ("text-xs-bold", "fs-6 fw-bold"),
            ("text-lg", "fs-5"),
            ("text-xl", "fs-4"),
            ("text-sm", "fs-6"),
            ("text-xs", "fs-6"),
            ("font-bold", "fw-bold"),
            ("label-bold", "fw-bold"),
        ],
        ungroup: false,
    },
    ClassGroup {
        label: "button",
        renames: &[
            ("btn-narrow", "btn-sm px-2"),
            ("btn-narrow-alt", "btn-sm px-2"),
            ("btn-narrow-120", "btn-sm"),
            ("btn-narrow-170", "btn-sm"),
            ("btn-compact", "btn-sm p-1"),
        ],
        ungroup: true,
    },
    ClassGroup {
        label: "column layout",
        renames: &[
            ("col-left-50", "float-start w-50 pe-2"),
            ("col-right-50", "float-end w-50 ps-2"),
        ],
        ungroup: false,
    },
    ClassGroup {
        label: "background",
        renames: &[("bg-lighter", "bg-light bg-opacity-50")],
        ungroup: false,
    },
    ClassGroup {
        label: "padding",
        renames: &[
            ("p-2-6", "p-2"),
            ("p-4-0", "px-2 py-0"),
            ("p-6-0", "px-3 py-0"),
        ],
        ungroup: false,
    },
];

/// Comment the reference note is inserted in front of.
pub const NOTE_ANCHOR: &str = "/* Display & Visibility */";

/// Heading line used to detect an already inserted note.
pub const NOTE_HEADING: &str = "NOTE: Now Using Bootstrap 5.3.3 from CDN";

pub const FRAMEWORK_NOTE: &str = "

/* ============================================
   NOTE: Now Using Bootstrap 5.3.3 from CDN
   ============================================

   Bootstrap 5 provides extensive utility classes:

   Spacing: .m-{0-5}, .mt-*, .mb-*, .ms-*, .me-*, .mx-*, .my-*
            .p-{0-5}, .pt-*, .pb-*, .ps-*, .pe-*, .px-*, .py-*

   Display: .d-none, .d-block, .d-inline, .d-inline-block, .d-flex, .d-grid

   Flexbox: .d-flex, .flex-row, .flex-column, .flex-wrap
            .justify-content-{start|center|end|between|around}
            .align-items-{start|center|end|stretch}

   Sizing:  .w-{25|50|75|100}, .h-{25|50|75|100}, .w-auto, .h-auto
            .mw-100, .mh-100, .vw-100, .vh-100

   Text:    .text-{start|center|end}, .text-{uppercase|lowercase|capitalize}
            .fw-{normal|bold|bolder|light}, .fs-{1-6}
            .text-{primary|secondary|success|danger|warning|info|light|dark|muted}

   Colors:  .bg-{primary|secondary|success|danger|warning|info|light|dark}
            .text-bg-{color} for colored backgrounds with contrasting text

   Borders: .border, .border-{top|end|bottom|start}, .border-{0-5}
            .rounded, .rounded-{top|end|bottom|start|circle|pill}

   Position: .position-{static|relative|absolute|fixed|sticky}
             .top-{0|50|100}, .bottom-*, .start-*, .end-*

   Shadows: .shadow, .shadow-sm, .shadow-lg

   Custom CSS below is for:
   - CSS Variables (theming)
   - Application-specific components
   - Dark mode overrides
   - Styles not in Bootstrap 5
   ============================================ */
";

/// Every class name some table replaces, with its replacement.
pub fn legacy_classes() -> impl Iterator<Item = Mapping> {
    CLASS_RENAMES
        .iter()
        .chain(SPACING_SCALE)
        .chain(CONSOLIDATIONS.iter().flat_map(|group| group.renames))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::selector::{classify, SelectorKind};
    use regex::Regex;

    #[test]
    fn test_class_tables_hold_plain_class_names() {
        for (from, _) in legacy_classes() {
            let selector = format!(".{from}");
            assert_eq!(classify(&selector), SelectorKind::Class(from), "{from}");
        }
    }

    #[test]
    fn test_utility_patterns_compile() {
        for category in REDUNDANT_UTILITIES {
            for rule in category.rules {
                assert!(Regex::new(rule.class).is_ok(), "{}", rule.class);
                if let Some(body) = rule.body {
                    assert!(Regex::new(body).is_ok(), "{body}");
                }
            }
        }
    }

    #[test]
    fn test_note_carries_heading() {
        assert!(FRAMEWORK_NOTE.contains(NOTE_HEADING));
    }
}
