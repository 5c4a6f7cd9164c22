//! Wallet state management

use leptos::prelude::*;
use shared::ChainId;

use crate::error::WalletError;
use crate::provider::{self, WalletProvider};

/// Wallet connection state with provider information
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected {
        address: String,
        chain: ChainId,
        provider: WalletProvider,
    },
    Error(WalletError),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn chain(&self) -> Option<ChainId> {
        match self {
            WalletState::Connected { chain, .. } => Some(*chain),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        match self {
            WalletState::Connected { provider, .. } => Some(*provider),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WalletError> {
        match self {
            WalletState::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Reactive wallet context shared by every widget under one provider
#[derive(Clone, Copy)]
pub struct ConnectContext {
    pub wallet: RwSignal<WalletState>,
}

impl Default for ConnectContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.wallet.with(|state| state.is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn chain(&self) -> Option<ChainId> {
        self.wallet.with(|state| state.chain())
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, chain: ChainId, provider: WalletProvider) {
        self.wallet.set(WalletState::Connected {
            address,
            chain,
            provider,
        });
    }

    pub fn set_error(&self, error: WalletError) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }

    /// What a click on the connect button does in the current state.
    pub fn toggle(&self) {
        match self.wallet.get_untracked() {
            WalletState::Connecting => {}
            WalletState::Connected { address, .. } => {
                log::info!("Disconnecting {}", shared::truncate_address(&address));
                self.disconnect();
            }
            WalletState::Disconnected | WalletState::Error(_) => self.connect(),
        }
    }

    /// Run the connect flow against the preferred injected wallet.
    ///
    /// Must be called from the browser; the work runs on the event loop.
    pub fn connect(&self) {
        if self.is_connecting() {
            return;
        }
        self.set_connecting();

        let ctx = *self;
        leptos::task::spawn_local(async move {
            let wallets = provider::detect_wallets();
            log::debug!("Detected {} injected wallet(s)", wallets.len());

            let Some(kind) = provider::preferred_wallet(&wallets) else {
                log::warn!("No injected wallet available");
                ctx.set_error(WalletError::NotInstalled);
                return;
            };

            log::info!("Connecting to {}", kind.name());
            match provider::connect(kind).await {
                Ok((address, chain)) => {
                    log::info!(
                        "Connected {} on {}",
                        shared::truncate_address(&address),
                        chain
                    );
                    ctx.set_connected(address, chain, kind);
                }
                Err(e) => {
                    log::warn!("{} connection failed: {}", kind.name(), e);
                    ctx.set_error(e);
                }
            }
        });
    }
}

pub fn provide_connect_context() -> ConnectContext {
    let context = ConnectContext::new();
    provide_context(context);
    context
}

/// The nearest [`ConnectContext`], or a fresh one provided at this level.
pub fn use_connect_context() -> ConnectContext {
    use_context::<ConnectContext>().unwrap_or_else(provide_connect_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    #[test]
    fn test_wallet_state_methods() {
        let state = WalletState::Connected {
            address: ADDR.to_string(),
            chain: ChainId::SEPOLIA,
            provider: WalletProvider::MetaMask,
        };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some(ADDR));
        assert_eq!(state.chain(), Some(ChainId::SEPOLIA));
        assert_eq!(state.provider(), Some(WalletProvider::MetaMask));

        let state = WalletState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.error(), None);

        let state = WalletState::Error(WalletError::Rejected);
        assert_eq!(state.error(), Some(&WalletError::Rejected));
    }

    #[test]
    fn test_context_transitions() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ConnectContext::new();
            assert!(!ctx.is_connected());

            ctx.set_connecting();
            assert!(ctx.is_connecting());

            ctx.set_connected(ADDR.to_string(), ChainId::ETHEREUM, WalletProvider::Rabby);
            assert!(ctx.is_connected());
            assert_eq!(ctx.address().as_deref(), Some(ADDR));
            assert_eq!(ctx.chain(), Some(ChainId::ETHEREUM));

            ctx.disconnect();
            assert!(!ctx.is_connected());
            assert_eq!(ctx.address(), None);
        });
    }

    #[test]
    fn test_toggle_disconnects_and_ignores_pending() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ConnectContext::new();

            ctx.set_connecting();
            ctx.toggle();
            assert!(ctx.is_connecting());

            ctx.set_connected(ADDR.to_string(), ChainId::ETHEREUM, WalletProvider::MetaMask);
            ctx.toggle();
            assert_eq!(ctx.wallet.get_untracked(), WalletState::Disconnected);
        });
    }

    #[test]
    fn test_use_connect_context_reuses_provided() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = provide_connect_context();
            provided.set_error(WalletError::NoAccounts);

            let found = use_connect_context();
            assert_eq!(
                found.wallet.get_untracked(),
                WalletState::Error(WalletError::NoAccounts)
            );
        });
    }
}
