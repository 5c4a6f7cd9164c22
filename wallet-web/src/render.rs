//! Rendering context and client-only directives
//!
//! Some components need browser APIs at runtime (the connect widget looks for
//! injected wallets). Those components declare a [`RenderDirective`] with
//! [`RenderMode::ClientOnly`], and the mount path checks it against the
//! [`RenderContext`] it is running in.

use thiserror::Error;

/// Where the component tree is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderContext {
    /// In the end user's browser, with `window` available.
    Client,
    /// Anywhere else: native builds, test runs, server-side generation.
    Server,
}

impl RenderContext {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") && web_sys::window().is_some() {
            RenderContext::Client
        } else {
            RenderContext::Server
        }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, RenderContext::Client)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Universal,
    ClientOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{component} is client-only and cannot be rendered without a browser")]
    ClientOnlyOnServer { component: &'static str },
}

/// A component's declared rendering requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderDirective {
    pub component: &'static str,
    pub mode: RenderMode,
}

impl RenderDirective {
    pub const fn client_only(component: &'static str) -> Self {
        Self {
            component,
            mode: RenderMode::ClientOnly,
        }
    }

    pub const fn universal(component: &'static str) -> Self {
        Self {
            component,
            mode: RenderMode::Universal,
        }
    }

    pub fn check(&self, context: RenderContext) -> Result<(), RenderError> {
        match (self.mode, context) {
            (RenderMode::ClientOnly, RenderContext::Server) => {
                Err(RenderError::ClientOnlyOnServer {
                    component: self.component,
                })
            }
            _ => Ok(()),
        }
    }
}
