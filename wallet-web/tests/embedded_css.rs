//! The stylesheet the app injects must define the classes its components use.

use cryptodevs_web::styles;

#[test]
fn navbar_css_is_not_empty() {
    assert!(
        !styles::NAVBAR_CSS.trim().is_empty(),
        "style/navbar.css appears to be empty"
    );
}

#[test]
fn stylesheet_defines_component_classes() {
    let css = styles::stylesheet();
    let required = [
        format!(".{} {{", styles::NAVBAR),
        ".connect-button__btn {".to_string(),
        ".connect-button__chain {".to_string(),
    ];
    for token in required {
        assert!(css.contains(&token), "Expected `{token}` in injected stylesheet");
    }
}
