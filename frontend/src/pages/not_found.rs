//! Fallback page for unknown routes.

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

/// 404 page.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="main">
            <section class="article-missing">
                <h1>{ "404" }</h1>
                <p>{ "Nothing lives at this address." }</p>
                <Link<Route> to={Route::Home}>{ "Back to all posts" }</Link<Route>>
            </section>
        </main>
    }
}
