//! The navbar must only be mounted in a browser.
//!
//! Native test runs are a server context, so every mount attempt here has to
//! be refused before the DOM is touched.

#![cfg(not(target_arch = "wasm32"))]

use cryptodevs_web::components::navbar;
use cryptodevs_web::render::{RenderContext, RenderError, RenderMode};

#[test]
fn navbar_is_declared_client_only() {
    assert_eq!(navbar::DIRECTIVE.mode, RenderMode::ClientOnly);
    assert_eq!(navbar::DIRECTIVE.component, "Navbar");
}

#[test]
fn native_run_is_not_a_client_context() {
    assert_eq!(RenderContext::current(), RenderContext::Server);
    assert!(!RenderContext::current().is_client());
}

#[test]
fn mount_is_refused_outside_the_browser() {
    assert_eq!(
        cryptodevs_web::mount(),
        Err(RenderError::ClientOnlyOnServer { component: "Navbar" })
    );
}

#[test]
fn directive_allows_client_context() {
    assert_eq!(navbar::DIRECTIVE.check(RenderContext::Client), Ok(()));
}
