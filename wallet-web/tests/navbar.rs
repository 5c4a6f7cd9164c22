//! Rendered structure of the navbar.
//!
//! The view is rendered to an HTML string inside a fresh reactive owner, the
//! same way a parent layout would build it. No browser is needed: the connect
//! widget only touches `window` from its click handler.

use cryptodevs_web::components::Navbar;
use cryptodevs_web::styles;
use cryptodevs_web::utils::constants::{BRAND_NAME, HOME_PATH};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn render_navbar() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <Navbar/> }.to_html())
}

fn text_between<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html.find(open).expect("open tag present") + open.len();
    let end = start + html[start..].find(close).expect("close tag present");
    &html[start..end]
}

#[test]
fn renders_one_nav_container_with_navbar_class() {
    let html = render_navbar();

    assert_eq!(html.matches("<nav").count(), 1, "{html}");
    assert_eq!(html.matches("</nav>").count(), 1, "{html}");
    assert!(html.starts_with(&format!("<nav class=\"{}\">", styles::NAVBAR)), "{html}");
}

#[test]
fn renders_one_link_to_root() {
    let html = render_navbar();
    let home_link = format!("<a href=\"{}\">", HOME_PATH);

    assert_eq!(html.matches("<a ").count(), 1, "{html}");
    assert_eq!(html.matches(&home_link).count(), 1, "{html}");
}

#[test]
fn link_label_is_brand_name() {
    let html = render_navbar();
    let link = text_between(&html, &format!("<a href=\"{}\">", HOME_PATH), "</a>");
    let label = text_between(link, "<p>", "</p>").replace("<!>", "");

    assert_eq!(label, BRAND_NAME);
}

#[test]
fn embeds_exactly_one_connect_widget_after_the_link() {
    let html = render_navbar();
    let marker = format!("data-widget=\"{}\"", lib_connect::button::WIDGET_MARKER);

    assert_eq!(html.matches(&marker).count(), 1, "{html}");

    let link_end = html.find("</a>").unwrap();
    let widget = html.find(&marker).unwrap();
    let nav_end = html.find("</nav>").unwrap();
    assert!(link_end < widget && widget < nav_end, "{html}");
}

#[test]
fn widget_starts_disconnected() {
    let html = render_navbar();

    assert!(html.contains("Connect Wallet"), "{html}");
}

#[test]
fn rendering_is_idempotent() {
    let first = render_navbar();
    let second = render_navbar();
    let third = render_navbar();

    assert_eq!(first, second);
    assert_eq!(second, third);
}
