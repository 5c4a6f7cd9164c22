//! EVM chain identifiers as reported by `eth_chainId`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chains the widget can name. Anything else renders as `Chain <id>`.
const KNOWN_CHAINS: &[(u64, &str)] = &[
    (1, "Ethereum"),
    (5, "Goerli"),
    (10, "OP Mainnet"),
    (137, "Polygon"),
    (8453, "Base"),
    (42161, "Arbitrum One"),
    (11155111, "Sepolia"),
    (31337, "Localhost"),
];

/// Numeric EIP-155 chain id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const ETHEREUM: ChainId = ChainId(1);
    pub const SEPOLIA: ChainId = ChainId(11155111);

    /// Parse the quantity string returned by `eth_chainId` (`"0x1"`, `"0xaa36a7"`).
    ///
    /// The `0x` prefix is mandatory; leading zeros are tolerated.
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value
            .trim()
            .strip_prefix("0x")
            .or_else(|| value.trim().strip_prefix("0X"))?;
        if digits.is_empty() {
            return None;
        }
        u64::from_str_radix(digits, 16).ok().map(ChainId)
    }

    /// Human readable name, if this is a chain we know about.
    pub fn known_name(&self) -> Option<&'static str> {
        KNOWN_CHAINS
            .iter()
            .find(|(id, _)| *id == self.0)
            .map(|(_, name)| *name)
    }

    pub fn name(&self) -> String {
        match self.known_name() {
            Some(name) => name.to_string(),
            None => format!("Chain {}", self.0),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
