//! CryptoDevs Web App - Leptos Frontend
//!
//! Parent layout: stylesheet, navbar, routed pages.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_connect::provide_connect_context;

use crate::components::Navbar;
use crate::pages::HomePage;
use crate::styles;
use crate::utils::constants::{HOME_PATH, LOADING_RETRY_MS};

#[component]
pub fn App() -> impl IntoView {
    // One wallet session for the navbar widget and every page
    provide_connect_context();

    // Backup in case start() ran before the placeholder was parsed
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(LOADING_RETRY_MS).await;
            crate::hide_loading_screen();
        });
    });

    view! {
        <style>{styles::stylesheet()}</style>
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href=HOME_PATH>
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
