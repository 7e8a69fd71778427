use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use stylemigrate_lib::prune;

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

const STYLESHEET: &str = r#":root {
    --accent: #336699;
}

/* Buttons */
.btn-accent {
    background: var(--accent);
}

.btn-accent:hover {
    background: #224466;
}

.panel > .title {
    font-weight: bold;
}

.label + .value {
    margin-left: 4px;
}

.a, .b {
    margin: 0;
}

.orphan {
    color: red;
}

@media (max-width: 600px) {
    .mobile-only { display: block; }
}

.btn {
    padding: 4px;
}
"#;

#[test]
fn test_soundness_on_simple_selectors() {
    let pruned = prune(
        ".foo { color: red; }\n.bar { color: blue; }",
        "<div class='foo'></div>",
    );
    assert!(pruned.stylesheet.contains(".foo { color: red; }"));
    assert!(!pruned.stylesheet.contains(".bar"));
    assert_eq!(pruned.removed, names(&["bar"]));
}

#[test]
fn test_idempotence() {
    let markup = r#"<div class="btn-accent a"></div>"#;
    let first = prune(STYLESHEET, markup);
    let second = prune(&first.stylesheet, markup);
    assert_eq!(second.stylesheet, first.stylesheet);
    assert!(second.removed.is_empty());
}

#[test]
fn test_conservative_on_pseudo_and_combinators() {
    // None of these names appear in the markup.
    let pruned = prune(STYLESHEET, "<p>empty</p>");
    assert!(pruned.stylesheet.contains(".btn-accent:hover {"));
    assert!(pruned.stylesheet.contains(".panel > .title {"));
    assert!(pruned.stylesheet.contains(".label + .value {"));
    assert!(pruned.stylesheet.contains(":root {"));
    assert!(pruned.stylesheet.contains(".mobile-only { display: block; }"));
    assert_eq!(pruned.removed, names(&["btn", "btn-accent", "orphan"]));
}

#[test]
fn test_word_boundary_correctness() {
    let pruned = prune(".btn { padding: 4px; }\n", r#"<a class="btn-large">x</a>"#);
    assert_eq!(pruned.stylesheet, "");
    assert_eq!(pruned.removed, names(&["btn"]));

    let kept = prune(".btn { padding: 4px; }\n", r#"<a class="btn btn-large">x</a>"#);
    assert_eq!(kept.stylesheet, ".btn { padding: 4px; }\n");
    assert!(kept.removed.is_empty());
}

#[test]
fn test_no_op_on_fully_used_stylesheet() {
    let markup = r#"<div class="btn-accent orphan btn a b"></div>"#;
    let pruned = prune(STYLESHEET, markup);
    assert_eq!(pruned.stylesheet, STYLESHEET);
    assert!(pruned.removed.is_empty());
}

#[test]
fn test_multi_selector_group_preserved() {
    let css = ".a, .b { margin: 0; }\n";
    let pruned = prune(css, r#"<div class="a"></div>"#);
    assert_eq!(pruned.stylesheet, css);
    assert!(pruned.removed.is_empty());

    let none_used = prune(css, "<div></div>");
    assert_eq!(none_used.stylesheet, css);
}

#[test]
fn test_rest_of_stylesheet_round_trips() {
    let markup = r#"<div class="btn-accent btn"></div>"#;
    let pruned = prune(STYLESHEET, markup);
    let expected = STYLESHEET.replace(".orphan {\n    color: red;\n}\n\n", "");
    assert_eq!(pruned.stylesheet, expected);
    assert_eq!(pruned.removed, names(&["orphan"]));
}

#[test]
fn test_unbalanced_braces_are_best_effort() {
    let pruned = prune(".gone { color: red; }\n.open { color: blue;\n", "<p></p>");
    assert_eq!(pruned.stylesheet, ".open { color: blue;\n");
    assert_eq!(pruned.removed, names(&["gone"]));
}
