//! Tests for failures: malformed input never produces partial output.

use gtkcss::{GtkCssError, translate};

#[test]
fn test_unterminated_define_color_fails() {
    let result = translate("@define-color a #fff\nbutton { color: @a; }");
    assert_eq!(
        result,
        Err(GtkCssError::InvalidSyntax {
            line: 2,
            column: 1,
            snippet: "button { color: @a; }".to_string(),
        })
    );
}

#[test]
fn test_define_color_at_end_without_semicolon() {
    assert!(matches!(
        translate("@define-color a #fff"),
        Err(GtkCssError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_error_after_valid_rules_discards_everything() {
    let result = translate("a { color: red; }\nb { color: red; \n");
    assert!(result.is_err());
}

#[test]
fn test_unbalanced_closing_brace() {
    let result = translate("a { color: red; } }");
    assert!(matches!(
        result,
        Err(GtkCssError::InvalidSyntax { line: 1, column: 19, .. })
    ));
}

#[test]
fn test_alpha_with_missing_factor_fails() {
    let result = translate("a { color: alpha(@fg); }");
    assert!(matches!(
        result,
        Err(GtkCssError::InvalidSyntax { line: 1, column: 21, .. })
    ));
}

#[test]
fn test_overflowing_factor_is_rejected() {
    let source = format!("a {{ color: alpha(red, {}); }}", "9".repeat(400));
    assert!(matches!(
        translate(&source),
        Err(GtkCssError::InvalidSyntax { line: 1, column: 23, .. })
    ));
}

#[test]
fn test_overflowing_mix_factor_is_rejected() {
    let source = format!("a {{ color: mix(red, blue, {}%); }}", "9".repeat(400));
    assert!(translate(&source).is_err());
}

#[test]
fn test_deeply_nested_calls_are_rejected() {
    let source = format!(
        "a {{ color: {}red{}; }}",
        "alpha(".repeat(20_000),
        ", 0.5)".repeat(20_000)
    );
    assert!(matches!(
        translate(&source),
        Err(GtkCssError::InvalidSyntax { line: 1, .. })
    ));
}

#[test]
fn test_deeply_nested_generic_calls_are_rejected() {
    let source = format!("a {{ background: {}; }}", "f(".repeat(20_000));
    assert!(matches!(
        translate(&source),
        Err(GtkCssError::InvalidSyntax { .. })
    ));
}

#[test]
fn test_error_message_names_position() {
    let err = translate("a {\n  color: ;\n}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "CSS syntax error at line 2, column 10: unexpected `;`"
    );
}
