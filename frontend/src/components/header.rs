//! Site header with navigation and the two theme pickers.

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::theme_select::ThemeSelect, config, router::Route};

/// Top navigation bar. The mobile panel repeats the theme picker so the
/// control stays reachable when the desktop nav is collapsed; both pickers
/// mirror through the shared theme context.
#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <Link<Route> to={Route::Home} classes={classes!("site-title")}>
                    { config::SITE_NAME }
                </Link<Route>>
                <nav class="site-nav" aria-label="Primary">
                    <ThemeSelect
                        id="color-theme-selector"
                        class={classes!("desktop-only")}
                    />
                </nav>
                <button
                    type="button"
                    class="mobile-menu-toggle"
                    aria-expanded={(*mobile_menu_open).to_string()}
                    aria-label="Toggle menu"
                    onclick={toggle_mobile_menu}
                >
                    { "Menu" }
                </button>
            </div>
            if *mobile_menu_open {
                <div class="mobile-menu-panel">
                    <ThemeSelect id="mobile-color-theme-selector" />
                </div>
            }
        </header>
    }
}
