//! Application constants

/// Label of the home link in the navbar.
pub const BRAND_NAME: &str = "CryptoDevs";

pub const HOME_PATH: &str = "/";

// Loading placeholder in index.html
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
pub const LOADING_RETRY_MS: u32 = 100;
