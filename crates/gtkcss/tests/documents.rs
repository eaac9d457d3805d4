//! End-to-end tests for whole-document translation.
//!
//! Covers top-level ordering, comments, and the property that plain web CSS
//! passes through with only whitespace changes.

use gtkcss::parser::{Rule, parse_document};
use gtkcss::translate;

// ============================================================================
// COMMENTS
// ============================================================================

#[test]
fn test_comment_is_verbatim() {
    let css = translate("/* Adwaita\n * colors */").unwrap();
    assert_eq!(css, "/* Adwaita\n * colors */");
}

#[test]
fn test_comment_between_rules() {
    let document = parse_document(
        "
        @define-color a #fff;
        /* buttons */
        button { color: @a; }
        ",
    )
    .unwrap();
    assert_eq!(document.rules.len(), 3);
    assert_eq!(document.rules[1], Rule::Comment("/* buttons */".to_string()));
}

#[test]
fn test_comment_before_rule_is_not_part_of_selector() {
    let document = parse_document("/* x */ button { color: red; }").unwrap();
    assert_eq!(document.rules.len(), 2);
    match &document.rules[1] {
        Rule::Css(rule) => assert_eq!(rule.selector, "button"),
        other => panic!("expected rule, got {:?}", other),
    }
}

// ============================================================================
// DOCUMENTS
// ============================================================================

#[test]
fn test_rules_are_joined_with_newline() {
    let css = translate("@define-color a #fff;@define-color b #000;").unwrap();
    assert_eq!(css, ":root { --a: #fff; }\n:root { --b: #000; }");
}

#[test]
fn test_empty_document() {
    assert_eq!(translate("").unwrap(), "");
    assert_eq!(translate("\n\n  \n").unwrap(), "");
}

#[test]
fn test_standard_css_round_trips() {
    let source = "
        body {
            color: var(--fg);
            background: linear-gradient(#fff, #eee);
            margin: 0;
        }
    ";
    let css = translate(source).unwrap();
    assert_eq!(
        css,
        "body {\n    color: var(--fg);\n    background: linear-gradient(#fff , #eee);\n    margin: 0;\n}"
    );
    assert_eq!(translate(&css).unwrap(), css);
}

#[test]
fn test_every_gnome_reference_is_rewritten() {
    let css = translate("a { border: 1px solid @borders; color: mix(@x, @y, 0.5); }").unwrap();
    assert!(!css.contains('@'));
    assert!(css.contains("var(--borders)"));
    assert!(css.contains("color-mix(in srgb, var(--x) 50%, var(--y))"));
}

#[test]
fn test_full_theme_snapshot() {
    let source = r#"
/* Palette */
@define-color accent_bg_color #3584e4;
@define-color view_fg_color rgba(0, 0, 0, 0.8);

selection {
    background-color: alpha(@view_fg_color,0.1);
    color: transparent;
}

headerbar > button:hover {
    background: linear-gradient(to bottom, @accent_bg_color, mix(@accent_bg_color, black, 0.2));
    -gtk-icon-source: -gtk-icontheme("open-menu-symbolic");
}

@keyframes spin {
    from { transform: rotate(0turn); }
    to { transform: rotate(1turn); }
}
"#;

    insta::assert_snapshot!(translate(source).unwrap(), @r#"
    /* Palette */
    :root { --accent_bg_color: #3584e4; }
    :root { --view_fg_color: rgba(0, 0, 0, 0.8); }
    selection {
        background-color: color-mix(in srgb, var(--view_fg_color) 10%, transparent);
        color: transparent;
    }
    headerbar > button:hover {
        background: linear-gradient(to bottom , var(--accent_bg_color) , color-mix(in srgb, var(--accent_bg_color) 20%, black));
        -gtk-icon-source: -gtk-icontheme("open-menu-symbolic");
    }
    @keyframes spin {
        from {
            transform: rotate(0turn);
        }
        to {
            transform: rotate(1turn);
        }
    }
    "#);
}
