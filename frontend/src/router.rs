//! Client-side routes.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{header::Header, scroll_to_top_button::ScrollToTopButton},
    pages::{article::ArticlePage, home::HomePage, not_found::NotFoundPage},
};

/// All navigable routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Article index.
    #[at("/")]
    Home,
    /// One article, addressed by its generator slug.
    #[at("/posts/:slug")]
    Article {
        /// Generator-assigned article slug.
        slug: String,
    },
    /// Catch-all.
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Article { slug } => html! { <ArticlePage {slug} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Router shell: header chrome, the routed page, and the floating
/// scroll-to-top control.
#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <ScrollToTopButton />
        </BrowserRouter>
    }
}
