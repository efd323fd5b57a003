//! Article page: injects the pre-rendered fragment and wires the
//! enhancement hooks onto it.

use yew::{prelude::*, virtual_dom::AttrValue};

use crate::{
    api,
    components::share_menu::ShareMenu,
    config,
    hooks::{use_code_copy_buttons, use_section_tracker},
    models::ArticleMeta,
    seo, utils,
};

/// Properties for [`ArticlePage`].
#[derive(Properties, Clone, PartialEq)]
pub struct ArticlePageProps {
    /// Generator slug identifying the article fragment to load.
    pub slug: String,
}

/// One blog article.
#[function_component(ArticlePage)]
pub fn article_page(props: &ArticlePageProps) -> Html {
    let fragment = use_state(|| None::<String>);
    let meta = use_state(|| None::<ArticleMeta>);
    let loading = use_state(|| true);

    {
        let fragment = fragment.clone();
        let meta = meta.clone();
        let loading = loading.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            loading.set(true);
            fragment.set(None);
            meta.set(None);

            {
                let fragment = fragment.clone();
                let loading = loading.clone();
                let slug = slug.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_article_html(&slug).await {
                        Ok(html) => fragment.set(Some(html)),
                        Err(err) => {
                            web_sys::console::error_1(&err.into());
                            fragment.set(None);
                        },
                    }
                    loading.set(false);
                });
            }

            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_manifest().await {
                    Ok(list) => {
                        meta.set(list.into_iter().find(|entry| entry.slug == slug));
                    },
                    Err(err) => {
                        web_sys::console::error_1(&err.into());
                    },
                }
            });

            || ()
        });
    }

    {
        let title = meta.as_ref().map(|entry| entry.title.clone());
        use_effect_with(title, |title| {
            // No manifest entry: fall back to the site name rather than
            // leaving the previous article's title behind.
            seo::set_document_title(title.as_deref());
            || ()
        });
    }

    use_code_copy_buttons((*fragment).clone());
    use_section_tracker((*fragment).clone());

    let share_url = current_url().unwrap_or_default();
    let share_title = meta
        .as_ref()
        .map(|entry| entry.title.clone())
        .unwrap_or_else(|| config::SITE_NAME.to_string());

    let body = if *loading {
        html! { <p class="loading">{ "Loading…" }</p> }
    } else if let Some(html_text) = (*fragment).clone() {
        let content = Html::from_html_unchecked(AttrValue::from(html_text));
        html! {
            <article class="article">
                <div class="article-actions">
                    if let Some(meta) = (*meta).clone() {
                        <time datetime={meta.date.clone()}>
                            { utils::format_date(&meta.date) }
                        </time>
                    }
                    <ShareMenu
                        url={AttrValue::from(share_url)}
                        title={AttrValue::from(share_title)}
                    />
                </div>
                // The fragment carries the article body, its TOC aside, and
                // the `.code-block` regions the hooks above attach to.
                { content }
            </article>
        }
    } else {
        html! {
            <section class="article-missing">
                <h1>{ "Article not found" }</h1>
                <p>{ "The post you are looking for does not exist or failed to load." }</p>
            </section>
        }
    };

    html! {
        <main class="main">
            { body }
        </main>
    }
}

fn current_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}
