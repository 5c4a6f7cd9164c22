//! Stylesheet module
//!
//! Class names used by the app's components, plus the stylesheet text that
//! defines them. Components refer to the constants, never to string literals.

/// Class on the `<nav>` element.
pub const NAVBAR: &str = "navbar";

pub const NAVBAR_CSS: &str = include_str!("../style/navbar.css");

/// Everything the app injects into its `<style>` element: its own rules
/// followed by the connect widget's.
pub fn stylesheet() -> String {
    format!("{}\n{}", NAVBAR_CSS, lib_connect::WIDGET_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_includes_widget_rules() {
        let css = stylesheet();
        assert!(css.starts_with(NAVBAR_CSS));
        assert!(css.contains(".connect-button__btn"));
    }
}
