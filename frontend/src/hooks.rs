//! Enhancement hooks that wire behavior onto generator-emitted markup.
//!
//! The article body arrives as a pre-rendered HTML fragment, so these hooks
//! run after injection, query the fixed selectors the generator guarantees
//! (`.code-block`, `.article-subheading`, `.content-table a`), and attach
//! listeners with explicit cleanup.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::{clipboard, config};

/// How long success/failure feedback stays on a copy button.
const COPY_RESET_MS: u32 = 1_000;

/// Shrinks the observer's active zone to the top half of the viewport, so a
/// heading counts as current once it crosses the vertical midpoint.
const ACTIVE_ZONE_MARGIN: &str = "0px 0px -50% 0px";

/// Boolean attribute marking the current TOC link.
const CURRENT_ATTR: &str = "data-current";

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn elements(doc: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(nodes) = doc.query_selector_all(selector) {
        for idx in 0..nodes.length() {
            if let Some(node) = nodes.item(idx) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    found.push(element);
                }
            }
        }
    }
    found
}

/// Append a copy-to-clipboard button to every `.code-block` in the rendered
/// article. Each button carries three icons (copy, success, failure) with
/// only the copy icon visible; a click copies the nested `code` element's
/// text and flashes the outcome for [`COPY_RESET_MS`].
///
/// Re-runs whenever `content` changes; listeners and injected buttons are
/// removed on cleanup.
#[hook]
pub fn use_code_copy_buttons(content: Option<String>) {
    use_effect_with(content, move |content| {
        let mut listeners: Vec<(Element, Closure<dyn FnMut(web_sys::Event)>)> = Vec::new();
        let mut buttons: Vec<Element> = Vec::new();

        if content.is_some() {
            if let Some(doc) = document() {
                for block in elements(&doc, ".code-block") {
                    let Some(button) = build_copy_button(&doc) else {
                        continue;
                    };
                    if block.append_child(&button).is_err() {
                        continue;
                    }

                    let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                        let Some(target) = event
                            .current_target()
                            .and_then(|target| target.dyn_into::<Element>().ok())
                        else {
                            return;
                        };
                        wasm_bindgen_futures::spawn_local(copy_code_text(target));
                    }) as Box<dyn FnMut(_)>);

                    if button
                        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                        .is_ok()
                    {
                        listeners.push((button.clone(), listener));
                    }
                    buttons.push(button);
                }
            }
        }

        move || {
            for (element, listener) in listeners {
                let _ = element.remove_event_listener_with_callback(
                    "click",
                    listener.as_ref().unchecked_ref(),
                );
            }
            for button in buttons {
                button.remove();
            }
        }
    });
}

fn build_copy_button(doc: &Document) -> Option<Element> {
    let button = doc.create_element("button").ok()?;
    button.set_class_name("copy-to-clipboard-btn");
    button.set_attribute("type", "button").ok()?;
    button.set_attribute("aria-label", "Copy code to clipboard").ok()?;
    button.set_inner_html(&format!(
        concat!(
            r#"<img class="copy-to-clipboard-icon show" src="{copy}" alt="copy to clipboard icon">"#,
            r#"<img class="success-copy-icon" src="{check}" alt="successful copy to clipboard icon">"#,
            r#"<img class="fail-copy-icon" src="{cross}" alt="failed copy to clipboard icon">"#,
        ),
        copy = config::asset_path("public/images/clipboard-icon.svg"),
        check = config::asset_path("public/images/check.svg"),
        cross = config::asset_path("public/images/x.svg"),
    ));
    Some(button)
}

async fn copy_code_text(button: Element) {
    // A block without a nested code element has nothing to copy.
    let code_text = button
        .parent_element()
        .and_then(|parent| parent.query_selector("code").ok().flatten())
        .and_then(|code| code.dyn_into::<HtmlElement>().ok())
        .map(|code| code.inner_text());
    let Some(text) = code_text else {
        return;
    };

    let status_selector = match clipboard::write_text(&text).await {
        Ok(()) => ".success-copy-icon",
        Err(err) => {
            web_sys::console::error_1(&err);
            ".fail-copy-icon"
        },
    };
    flash_status_icon(&button, status_selector).await;
}

/// Swap the idle icon for the status icon, disable the button, and restore
/// both after the feedback delay. The cycle always ends back in the idle
/// state, whichever status icon was shown.
pub async fn flash_status_icon(button: &Element, status_selector: &str) {
    let Some(copy_icon) = button.query_selector(".copy-to-clipboard-icon").ok().flatten() else {
        return;
    };
    let Some(status_icon) = button.query_selector(status_selector).ok().flatten() else {
        return;
    };

    let _ = copy_icon.class_list().toggle("show");
    let _ = status_icon.class_list().toggle("show");
    let _ = button.set_attribute("disabled", "true");

    TimeoutFuture::new(COPY_RESET_MS).await;

    let _ = copy_icon.class_list().toggle("show");
    let _ = status_icon.class_list().toggle("show");
    let _ = button.remove_attribute("disabled");
}

/// Track which article subheading sits in the reading zone and mark the
/// matching TOC link current; clicks on TOC links smooth-scroll the heading
/// to the viewport center instead of jumping.
///
/// When nothing intersects (reader between sections, or past the last one),
/// the previous selection is left in place rather than cleared.
#[hook]
pub fn use_section_tracker(content: Option<String>) {
    use_effect_with(content, move |content| {
        let mut observer: Option<IntersectionObserver> = None;
        let mut observer_callback: Option<Closure<dyn FnMut(js_sys::Array)>> = None;
        let mut listeners: Vec<(Element, Closure<dyn FnMut(web_sys::Event)>)> = Vec::new();

        if content.is_some() {
            if let Some(doc) = document() {
                let headings = elements(&doc, ".article-subheading");
                let links = elements(&doc, ".content-table a");

                if !headings.is_empty() && !links.is_empty() {
                    let callback = {
                        let links = links.clone();
                        Closure::wrap(Box::new(move |entries: js_sys::Array| {
                            let mut intersecting = Vec::new();
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                else {
                                    continue;
                                };
                                if !entry.is_intersecting() {
                                    continue;
                                }
                                if let Some(id) = entry.target().get_attribute("id") {
                                    intersecting
                                        .push((id, entry.bounding_client_rect().bottom()));
                                }
                            }
                            if let Some(current_id) = nearest_active(&intersecting) {
                                mark_current_link(&links, current_id);
                            }
                        }) as Box<dyn FnMut(js_sys::Array)>)
                    };

                    let init = IntersectionObserverInit::new();
                    init.set_root_margin(ACTIVE_ZONE_MARGIN);
                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        for heading in &headings {
                            obs.observe(heading);
                        }
                        observer = Some(obs);
                    }
                    observer_callback = Some(callback);

                    for link in &links {
                        let headings = headings.clone();
                        let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                            event.prevent_default();
                            let href = event
                                .current_target()
                                .and_then(|target| target.dyn_into::<Element>().ok())
                                .and_then(|el| el.get_attribute("href"));
                            let Some(href) = href else {
                                return;
                            };
                            let Some(fragment) = fragment_id(&href) else {
                                return;
                            };
                            scroll_heading_into_view(&headings, fragment);
                        })
                            as Box<dyn FnMut(_)>);
                        if link
                            .add_event_listener_with_callback(
                                "click",
                                listener.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            listeners.push((link.clone(), listener));
                        }
                    }
                }
            }
        }

        move || {
            if let Some(obs) = observer {
                obs.disconnect();
            }
            drop(observer_callback);
            for (element, listener) in listeners {
                let _ = element.remove_event_listener_with_callback(
                    "click",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    });
}

/// Among intersecting headings `(id, rect bottom)`, the active one is the
/// one whose bottom edge sits highest in the viewport. Empty input returns
/// `None`, leaving the previous selection untouched.
fn nearest_active(intersecting: &[(String, f64)]) -> Option<&str> {
    intersecting
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id.as_str())
}

/// Fragment part of an in-page link: `"#setup"` or `"/post#setup"` give
/// `"setup"`; links without a fragment give `None`.
fn fragment_id(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Flag the link whose fragment matches `current_id` with `data-current`
/// and clear the flag from every other link, so at most one link carries it.
pub fn mark_current_link(links: &[Element], current_id: &str) {
    for link in links {
        let href = link.get_attribute("href");
        let matches = href.as_deref().and_then(fragment_id) == Some(current_id);
        if matches {
            let _ = link.set_attribute(CURRENT_ATTR, "true");
        } else {
            let _ = link.remove_attribute(CURRENT_ATTR);
        }
    }
}

fn scroll_heading_into_view(headings: &[Element], id: &str) {
    for heading in headings {
        if heading.id() == id {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            heading.scroll_into_view_with_scroll_into_view_options(&options);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs
            .iter()
            .map(|(id, bottom)| (id.to_string(), *bottom))
            .collect()
    }

    #[test]
    fn highest_intersecting_heading_wins() {
        let entries = candidates(&[("later", 200.0), ("earlier", 100.0)]);
        assert_eq!(nearest_active(&entries), Some("earlier"));
    }

    #[test]
    fn single_heading_is_active() {
        let entries = candidates(&[("only", 340.0)]);
        assert_eq!(nearest_active(&entries), Some("only"));
    }

    #[test]
    fn no_intersection_changes_nothing() {
        assert_eq!(nearest_active(&[]), None);
    }

    #[test]
    fn fragment_id_extracts_after_hash() {
        assert_eq!(fragment_id("#setup"), Some("setup"));
        assert_eq!(fragment_id("/posts/first#conclusion"), Some("conclusion"));
        assert_eq!(fragment_id("/posts/first"), None);
        assert_eq!(fragment_id("#"), None);
    }
}
