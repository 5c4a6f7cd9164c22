//! # Wallet Errors
//!
//! [`WalletError`] covers everything the connect flow can hit. Errors coming
//! back from an injected provider carry an EIP-1193 / JSON-RPC `code`, which
//! [`WalletError::from_rpc`] maps onto the variants the button cares about.

use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// EIP-1193 "User Rejected Request".
pub const CODE_USER_REJECTED: i64 = 4001;
/// EIP-1193 "Unauthorized".
pub const CODE_UNAUTHORIZED: i64 = 4100;
/// Non-standard but universal: a permission request is already open in the wallet.
pub const CODE_REQUEST_PENDING: i64 = -32002;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("No injected wallet found. Install a browser wallet such as MetaMask.")]
    NotInstalled,

    #[error("Connection request was rejected")]
    Rejected,

    #[error("Wallet has not authorized this site")]
    Unauthorized,

    #[error("A connection request is already pending in the wallet")]
    RequestPending,

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error("Wallet RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected wallet response: {0}")]
    InvalidResponse(String),
}

impl WalletError {
    /// Map an EIP-1193 provider error code and message onto a variant.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        match code {
            CODE_USER_REJECTED => WalletError::Rejected,
            CODE_UNAUTHORIZED => WalletError::Unauthorized,
            CODE_REQUEST_PENDING => WalletError::RequestPending,
            _ => WalletError::Rpc {
                code,
                message: message.into(),
            },
        }
    }

    /// Convert a value thrown by a provider `request()` call.
    ///
    /// Objects with a numeric `code` go through [`WalletError::from_rpc`];
    /// anything else becomes [`WalletError::InvalidResponse`].
    pub fn from_js(value: &JsValue) -> Self {
        let message = Reflect::get(value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));

        match Reflect::get(value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64())
        {
            Some(code) => WalletError::from_rpc(code as i64, message),
            None => WalletError::InvalidResponse(message),
        }
    }

    /// Whether clicking the button again is likely to help.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, WalletError::NotInstalled | WalletError::RequestPending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rpc_known_codes() {
        assert_eq!(WalletError::from_rpc(4001, "User rejected"), WalletError::Rejected);
        assert_eq!(WalletError::from_rpc(4100, "nope"), WalletError::Unauthorized);
        assert_eq!(
            WalletError::from_rpc(-32002, "already pending"),
            WalletError::RequestPending
        );
    }

    #[test]
    fn test_from_rpc_other_codes_keep_message() {
        let err = WalletError::from_rpc(-32603, "Internal JSON-RPC error.");
        assert_eq!(
            err,
            WalletError::Rpc {
                code: -32603,
                message: "Internal JSON-RPC error.".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Wallet RPC error -32603: Internal JSON-RPC error."
        );
    }

    #[test]
    fn test_retryable() {
        assert!(WalletError::Rejected.is_retryable());
        assert!(WalletError::NoAccounts.is_retryable());
        assert!(!WalletError::NotInstalled.is_retryable());
        assert!(!WalletError::RequestPending.is_retryable());
    }
}
