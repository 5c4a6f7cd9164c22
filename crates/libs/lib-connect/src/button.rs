//! Connect Button Component

use leptos::prelude::*;

use crate::state::{use_connect_context, WalletState};

/// Marker attribute value identifying the widget root in rendered markup.
pub const WIDGET_MARKER: &str = "connect-button";

/// Text shown on the button for a given state.
pub fn button_label(state: &WalletState) -> String {
    match state {
        WalletState::Disconnected => "Connect Wallet".to_string(),
        WalletState::Connecting => "Connecting...".to_string(),
        WalletState::Connected { address, .. } => shared::truncate_address(address),
        WalletState::Error(_) => "Retry".to_string(),
    }
}

fn button_class(state: &WalletState) -> &'static str {
    match state {
        WalletState::Disconnected => "connect-button__btn",
        WalletState::Connecting => "connect-button__btn connect-button__btn--pending",
        WalletState::Connected { .. } => "connect-button__btn connect-button__btn--connected",
        WalletState::Error(_) => "connect-button__btn connect-button__btn--error",
    }
}

/// Wallet connect button. Takes no props; uses the surrounding
/// [`ConnectContext`](crate::ConnectContext) or provides its own.
#[component]
pub fn ConnectButton() -> impl IntoView {
    let ctx = use_connect_context();

    let on_click = move |_| ctx.toggle();

    view! {
        <div class="connect-button" data-widget=WIDGET_MARKER>
            <button
                type="button"
                class=move || ctx.wallet.with(button_class)
                title=move || ctx.wallet.with(|state| state.error().map(|e| e.to_string()))
                disabled=move || ctx.is_connecting()
                on:click=on_click
            >
                {move || ctx.wallet.with(button_label)}
                {move || {
                    ctx.chain()
                        .map(|chain| view! { <span class="connect-button__chain">{chain.name()}</span> })
                }}
            </button>
        </div>
    }
}
