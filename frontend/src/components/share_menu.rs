//! Share popover: link list toggle plus a copy-current-link control.

use wasm_bindgen::{closure::Closure, JsCast};
use yew::prelude::*;

use crate::clipboard;

/// Feedback text on the copy-link control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CopyLabel {
    #[default]
    Idle,
    Copied,
    Error,
}

impl CopyLabel {
    fn text(self) -> &'static str {
        match self {
            CopyLabel::Idle => "Copy Link",
            CopyLabel::Copied => "Copied!",
            CopyLabel::Error => "Error",
        }
    }
}

/// Properties for [`ShareMenu`].
#[derive(Properties, PartialEq)]
pub struct ShareMenuProps {
    /// Absolute URL of the page being shared.
    pub url: AttrValue,
    /// Page title, prefilled into the share targets.
    pub title: AttrValue,
}

/// Share toggle, link list, and copy-link control for the current page.
///
/// The toggle and copy handlers stop propagation so the document-level
/// outside-click listener never sees clicks they own; any other click while
/// the list is open closes it and resets the label.
#[function_component(ShareMenu)]
pub fn share_menu(props: &ShareMenuProps) -> Html {
    let open = use_state(|| false);
    let label = use_state(CopyLabel::default);
    let list_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    let on_toggle = {
        let open = open.clone();
        let label = label.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            label.set(CopyLabel::Idle);
            open.set(!*open);
        })
    };

    let on_copy = {
        let label = label.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            let Some(url) = event
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.get_attribute("data-share-url"))
            else {
                return;
            };
            let label = label.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match clipboard::write_text(&url).await {
                    Ok(()) => label.set(CopyLabel::Copied),
                    Err(err) => {
                        web_sys::console::error_1(&err);
                        label.set(CopyLabel::Error);
                    },
                }
            });
        })
    };

    // Outside-click dismissal, active only while the list is open.
    {
        let open = open.clone();
        let label = label.clone();
        let list_ref = list_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with(*open, move |is_open| {
            let listener_opt = if *is_open {
                let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                        .map(|node| {
                            let in_list = list_ref
                                .cast::<web_sys::Element>()
                                .is_some_and(|list| list.contains(Some(&node)));
                            let on_toggle_btn = toggle_ref
                                .cast::<web_sys::Element>()
                                .is_some_and(|btn| btn.contains(Some(&node)));
                            in_list || on_toggle_btn
                        })
                        .unwrap_or(false);
                    if !inside {
                        open.set(false);
                        label.set(CopyLabel::Idle);
                    }
                }) as Box<dyn FnMut(_)>);

                if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
                    let _ = doc
                        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }
                Some(listener)
            } else {
                None
            };

            move || {
                if let Some(listener) = listener_opt {
                    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
                        let _ = doc.remove_event_listener_with_callback(
                            "click",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    let encoded_url = urlencoding::encode(props.url.as_str()).into_owned();
    let encoded_title = urlencoding::encode(props.title.as_str()).into_owned();
    let targets = [
        (
            "Share on X",
            format!("https://twitter.com/intent/tweet?url={encoded_url}&text={encoded_title}"),
        ),
        (
            "Share on LinkedIn",
            format!("https://www.linkedin.com/sharing/share-offsite/?url={encoded_url}"),
        ),
        (
            "Share on Hacker News",
            format!("https://news.ycombinator.com/submitlink?u={encoded_url}&t={encoded_title}"),
        ),
    ];

    html! {
        <div class="share-menu">
            <button
                type="button"
                id="share-btn"
                ref={toggle_ref}
                onclick={on_toggle}
                aria-expanded={(*open).to_string()}
                aria-label="Share this article"
            >
                { "Share" }
            </button>
            <ul
                id="share-links-list"
                ref={list_ref}
                class={classes!("share-links-list", (*open).then_some("show"))}
            >
                { for targets.iter().map(|(name, href)| html! {
                    <li>
                        <a href={href.clone()} target="_blank" rel="noopener noreferrer">
                            { *name }
                        </a>
                    </li>
                }) }
                <li>
                    <button
                        type="button"
                        id="share-copy-link"
                        data-share-url={props.url.clone()}
                        onclick={on_copy}
                    >
                        { label.text() }
                    </button>
                </li>
            </ul>
        </div>
    }
}
