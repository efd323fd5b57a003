//! Article index page, rendered from the generator manifest.

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{api, models::ArticleMeta, router::Route, seo, utils};

/// Article index.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let articles = use_state(Vec::<ArticleMeta>::new);
    let loading = use_state(|| true);

    {
        let articles = articles.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            seo::set_document_title(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_manifest().await {
                    Ok(mut list) => {
                        // Newest first; ISO dates sort lexicographically.
                        list.sort_by(|a, b| b.date.cmp(&a.date));
                        articles.set(list);
                    },
                    Err(err) => {
                        web_sys::console::error_1(&err.into());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let count = articles.len();

    html! {
        <main class="main">
            <section class="article-index" aria-label="All posts">
                if *loading {
                    <p class="loading">{ "Loading…" }</p>
                } else {
                    <p class="article-count">
                        { format!("{} post{}", count, utils::pluralize(count)) }
                    </p>
                    <ul class="article-list">
                        { for articles.iter().cloned().map(|article| html! {
                            <li class="article-list-item">
                                <Link<Route> to={Route::Article { slug: article.slug.clone() }}>
                                    { article.title.clone() }
                                </Link<Route>>
                                <time datetime={article.date.clone()}>
                                    { utils::format_date(&article.date) }
                                </time>
                                if !article.description.is_empty() {
                                    <p class="article-description">
                                        { article.description.clone() }
                                    </p>
                                }
                            </li>
                        }) }
                    </ul>
                }
            </section>
        </main>
    }
}
