//! Injected Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for EIP-1193 providers injected at `window.ethereum`.
//! When several extensions are installed, most of them expose the full list
//! at `window.ethereum.providers`; each entry is classified by its vendor flag.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::ChainId;
use wasm_bindgen::prelude::*;

use crate::error::{self, WalletError};

/// Supported injected wallet kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    MetaMask,
    Coinbase,
    Rabby,
    Brave,
    Injected,
}

impl WalletProvider {
    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "MetaMask",
            WalletProvider::Coinbase => "Coinbase Wallet",
            WalletProvider::Rabby => "Rabby",
            WalletProvider::Brave => "Brave Wallet",
            WalletProvider::Injected => "Browser Wallet",
        }
    }

    /// Id used on the JavaScript side of the bindings.
    pub fn id(&self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "metamask",
            WalletProvider::Coinbase => "coinbase",
            WalletProvider::Rabby => "rabby",
            WalletProvider::Brave => "brave",
            WalletProvider::Injected => "injected",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "metamask" => Some(WalletProvider::MetaMask),
            "coinbase" => Some(WalletProvider::Coinbase),
            "rabby" => Some(WalletProvider::Rabby),
            "brave" => Some(WalletProvider::Brave),
            "injected" => Some(WalletProvider::Injected),
            _ => None,
        }
    }
}

// ============================================================================
// PROVIDER DETECTION AND REQUESTS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function injectedProviders() {
    const eth = window.ethereum;
    if (!eth) {
        return [];
    }
    if (Array.isArray(eth.providers) && eth.providers.length > 0) {
        return eth.providers;
    }
    return [eth];
}

// Rabby and Brave also set isMetaMask, so they are checked first.
function kindOf(p) {
    if (p.isRabby) return 'rabby';
    if (p.isBraveWallet) return 'brave';
    if (p.isCoinbaseWallet) return 'coinbase';
    if (p.isMetaMask) return 'metamask';
    return 'injected';
}

export function detectInjected() {
    const seen = new Set();
    const wallets = [];
    for (const p of injectedProviders()) {
        const kind = kindOf(p);
        if (seen.has(kind)) {
            continue;
        }
        seen.add(kind);
        wallets.push({ name: kind, provider: kind, installed: true });
    }
    return wallets;
}

export function hasInjected(kind) {
    return injectedProviders().some(p => kindOf(p) === kind);
}

export async function requestInjected(kind, args) {
    const p = injectedProviders().find(p => kindOf(p) === kind);
    if (!p) {
        throw new Error(kind + ' wallet not found');
    }
    return await p.request(args);
}
")]
extern "C" {
    /// List every injected provider, one entry per wallet kind
    #[wasm_bindgen(js_name = detectInjected)]
    fn detect_injected() -> JsValue;

    /// Whether a provider of this kind is injected
    #[wasm_bindgen(js_name = hasInjected)]
    fn has_injected(kind: &str) -> bool;

    /// `provider.request(args)` on the provider of this kind
    #[wasm_bindgen(js_name = requestInjected, catch)]
    async fn request_injected(kind: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Detected wallet information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub name: String,
    pub provider: String,
    pub installed: bool,
}

impl DetectedWallet {
    pub fn kind(&self) -> WalletProvider {
        WalletProvider::from_id(&self.provider).unwrap_or(WalletProvider::Injected)
    }
}

/// EIP-1193 `RequestArguments`
#[derive(Debug, Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    params: Vec<Value>,
}

/// Get list of injected wallets. Empty when nothing is injected.
pub fn detect_wallets() -> Vec<DetectedWallet> {
    let wallets: Vec<DetectedWallet> = serde_wasm_bindgen::from_value(detect_injected())
        .unwrap_or_else(|e| {
            log::warn!("Could not read injected wallets: {}", e);
            vec![]
        });

    wallets
        .into_iter()
        .map(|mut w| {
            w.name = w.kind().name().to_string();
            w
        })
        .collect()
}

/// Pick the wallet the button connects to when the user has not chosen one.
///
/// Named wallets win over an anonymous injected provider.
pub fn preferred_wallet(wallets: &[DetectedWallet]) -> Option<WalletProvider> {
    wallets
        .iter()
        .filter(|w| w.installed)
        .map(DetectedWallet::kind)
        .min_by_key(|kind| matches!(kind, WalletProvider::Injected))
}

/// Check if a specific wallet is injected
pub fn is_wallet_installed(provider: WalletProvider) -> bool {
    has_injected(provider.id())
}

async fn request(provider: WalletProvider, method: &str) -> error::Result<JsValue> {
    if !is_wallet_installed(provider) {
        return Err(WalletError::NotInstalled);
    }

    let args = RequestArguments {
        method,
        params: Vec::new(),
    };
    let args = serde_wasm_bindgen::to_value(&args)
        .map_err(|e| WalletError::InvalidResponse(e.to_string()))?;

    log::debug!("{} -> {}", provider.id(), method);
    request_injected(provider.id(), args)
        .await
        .map_err(|e| WalletError::from_js(&e))
}

/// `eth_requestAccounts`: prompts the user if the site is not yet authorized.
pub async fn request_accounts(provider: WalletProvider) -> error::Result<Vec<String>> {
    let value = request(provider, "eth_requestAccounts").await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::InvalidResponse(e.to_string()))
}

/// `eth_chainId`
pub async fn chain_id(provider: WalletProvider) -> error::Result<ChainId> {
    let value = request(provider, "eth_chainId").await?;
    let hex = value
        .as_string()
        .ok_or_else(|| WalletError::InvalidResponse("chain id is not a string".to_string()))?;
    ChainId::from_hex(&hex)
        .ok_or_else(|| WalletError::InvalidResponse(format!("bad chain id {}", hex)))
}

/// Connect to a wallet provider, returning the first account and the active chain.
pub async fn connect(provider: WalletProvider) -> error::Result<(String, ChainId)> {
    let accounts = request_accounts(provider).await?;
    let address = first_account(accounts)?;
    let chain = chain_id(provider).await?;
    Ok((address, chain))
}

fn first_account(accounts: Vec<String>) -> error::Result<String> {
    accounts.into_iter().next().ok_or(WalletError::NoAccounts)
}
