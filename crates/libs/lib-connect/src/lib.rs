//! # lib-connect
//!
//! Wallet-connect widget for Leptos client-side apps. Drop [`ConnectButton`]
//! anywhere in a view; it needs no props and no configuration.
//!
//! - **[`provider`]**: `wasm-bindgen` bindings to injected EIP-1193 wallets
//!   (`window.ethereum`), detection and the connect flow
//! - **[`state`]**: [`WalletState`] and the reactive [`ConnectContext`]
//! - **[`button`]**: the [`ConnectButton`] component
//! - **[`error`]**: [`WalletError`]
//!
//! Browser APIs are only touched from the button's click handler, so the
//! component can be rendered (and tested) outside a browser.
//!
//! ```rust,no_run
//! use leptos::prelude::*;
//! use lib_connect::ConnectButton;
//!
//! #[component]
//! fn Header() -> impl IntoView {
//!     view! { <header><ConnectButton/></header> }
//! }
//! ```

pub mod button;
pub mod error;
pub mod provider;
pub mod state;

/// Stylesheet for the widget's `connect-button__*` classes. The host app
/// injects it once.
pub const WIDGET_CSS: &str = include_str!("../style/connect-button.css");

pub use button::ConnectButton;
pub use error::{Result, WalletError};
pub use provider::{DetectedWallet, WalletProvider};
pub use state::{provide_connect_context, use_connect_context, ConnectContext, WalletState};
