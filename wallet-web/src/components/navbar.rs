//! Navigation Bar Component

use leptos::prelude::*;
use lib_connect::ConnectButton;

use crate::render::RenderDirective;
use crate::styles;
use crate::utils::constants::{BRAND_NAME, HOME_PATH};

/// The connect widget probes the browser for injected wallets.
pub const DIRECTIVE: RenderDirective = RenderDirective::client_only("Navbar");

/// Brand link home plus the wallet connect button. No props, no state.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class=styles::NAVBAR>
            <a href=HOME_PATH>
                <p>{BRAND_NAME}</p>
            </a>
            <ConnectButton/>
        </nav>
    }
}
