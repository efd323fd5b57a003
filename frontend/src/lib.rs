//! Client-side behavior for the blog.
//!
//! The site generator emits the markup (article bodies, code blocks, the
//! table of contents); this crate is the thin shell that loads those
//! fragments and layers the interactive parts on top: theme switching,
//! copy-to-clipboard buttons, scroll-spy section tracking, the share
//! popover, and the scroll-to-top control.

pub mod api;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod router;
pub mod seo;
pub mod theme;
pub mod utils;

use yew::prelude::*;

/// Application root: theme state wraps everything so both pickers share it.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <theme::ThemeProvider>
            <router::AppRouter />
        </theme::ThemeProvider>
    }
}

/// Mount the application onto the document body.
pub fn start() {
    yew::Renderer::<App>::new().render();
}
