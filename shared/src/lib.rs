//! # Shared Display Helpers
//!
//! Pure, target-independent helpers used by the wallet-connect widget library
//! and the web frontend. Nothing in here touches the browser, so it is unit
//! tested natively.
//!
//! ## Structure
//!
//! - **[`utils`]**: Address formatting
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//! - **[`chain`]**: EVM chain identifiers
//!   - **[`chain::ChainId`]**: Parsed `eth_chainId` value with a display name
//!
//! ## Usage
//!
//! ```rust
//! use shared::chain::ChainId;
//! use shared::utils::truncate_address;
//!
//! let chain = ChainId::from_hex("0xaa36a7").unwrap();
//! assert_eq!(chain.name(), "Sepolia");
//!
//! let display = truncate_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F");
//! assert_eq!(display, "0x71C7...976F");
//! ```

pub mod chain;
pub mod utils;

pub use chain::ChainId;
pub use utils::*;
