//! Home Page

use leptos::prelude::*;
use lib_connect::use_connect_context;

use crate::utils::constants::BRAND_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_connect_context();

    view! {
        <main class="home" style="max-width: 720px; margin: 0 auto; padding: 48px 24px;">
            <h1 style="font-size: 32px; font-weight: 700; margin-bottom: 16px;">
                {format!("Welcome to {}", BRAND_NAME)}
            </h1>
            <p style="color: #cccccc; margin-bottom: 24px;">
                "Get started by editing "<code>"wallet-web/src/pages/home.rs"</code>
            </p>
            <p class="home-status" style="color: #cccccc;">
                {move || match wallet_ctx.address() {
                    Some(address) => format!(
                        "Connected as {} on {}",
                        shared::truncate_address(&address),
                        wallet_ctx.chain().map(|c| c.name()).unwrap_or_default()
                    ),
                    None => "Connect a wallet with the button in the top right.".to_string(),
                }}
            </p>
        </main>
    }
}
