//! Browser-level smoke tests.
//!
//! Run with: wasm-pack test --headless --chrome frontend
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use savvy_blog_frontend::{
    components::{
        share_menu::{ShareMenu, ShareMenuProps},
        theme_select::ThemeSelect,
    },
    hooks, seo,
    theme::{self, Theme, ThemeProvider},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|win| win.document())
        .expect("test page has a document")
}

fn mount_point() -> Element {
    let doc = document();
    let root = doc.create_element("div").expect("mount root");
    doc.body()
        .expect("test page has a body")
        .append_child(&root)
        .expect("attach mount root");
    root
}

fn element_by_id(id: &str) -> Element {
    document().get_element_by_id(id).expect("element by id")
}

/// Flush a yew re-render and any freshly registered listeners.
async fn settle() {
    TimeoutFuture::new(50).await;
}

#[wasm_bindgen_test]
fn theme_round_trip_persists_override() {
    theme::store(Theme::Dark);
    assert_eq!(theme::load(), Theme::Dark);

    // The sentinel clears the key entirely.
    theme::store(Theme::System);
    assert_eq!(theme::load(), Theme::System);
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("theme").ok().flatten());
    assert_eq!(raw, None);
}

#[wasm_bindgen_test]
fn apply_stamps_the_document_element() {
    theme::apply(Theme::Light);
    assert_eq!(document_theme().as_deref(), Some("light"));

    theme::apply(Theme::Dark);
    assert_eq!(document_theme().as_deref(), Some("dark"));

    theme::apply(Theme::System);
    assert_eq!(document_theme(), None);
}

fn document_theme() -> Option<String> {
    document()
        .document_element()
        .and_then(|el| el.get_attribute("data-theme"))
}

#[function_component(PickerPair)]
fn picker_pair() -> Html {
    html! {
        <ThemeProvider>
            <ThemeSelect id="color-theme-selector" />
            <ThemeSelect id="mobile-color-theme-selector" />
        </ThemeProvider>
    }
}

/// Set a select's value the way a user would, so its options turn dirty,
/// then fire the bubbling change event the picker listens for.
async fn change_picker(select: &HtmlSelectElement, value: &str) {
    select.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event =
        web_sys::Event::new_with_event_init_dict("change", &init).expect("change event");
    let _ = select.dispatch_event(&event);
    settle().await;
}

#[wasm_bindgen_test]
async fn pickers_mirror_after_both_have_been_touched() {
    let root = mount_point();
    yew::Renderer::<PickerPair>::with_root(root.clone()).render();
    settle().await;

    let desktop: HtmlSelectElement = element_by_id("color-theme-selector")
        .dyn_into()
        .expect("desktop picker");
    let mobile: HtmlSelectElement = element_by_id("mobile-color-theme-selector")
        .dyn_into()
        .expect("mobile picker");

    change_picker(&desktop, "dark").await;
    assert_eq!(mobile.value(), "dark");

    // The desktop picker's options are dirty now; it must still follow a
    // change made on the mobile picker.
    change_picker(&mobile, "light").await;
    assert_eq!(desktop.value(), "light");
    assert_eq!(mobile.value(), "light");

    theme::store(Theme::System);
    root.remove();
}

#[wasm_bindgen_test]
fn exactly_one_toc_link_carries_the_current_flag() {
    let doc = document();
    let links: Vec<Element> = ["#intro", "#setup", "#wrap-up"]
        .iter()
        .map(|href| {
            let anchor = doc.create_element("a").expect("anchor");
            anchor.set_attribute("href", href).expect("href");
            anchor
        })
        .collect();

    hooks::mark_current_link(&links, "setup");
    let flagged: Vec<&Element> = links
        .iter()
        .filter(|link| link.get_attribute("data-current").is_some())
        .collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].get_attribute("href").as_deref(), Some("#setup"));

    // Moving the selection clears the previous link.
    hooks::mark_current_link(&links, "wrap-up");
    let flagged: Vec<&Element> = links
        .iter()
        .filter(|link| link.get_attribute("data-current").is_some())
        .collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].get_attribute("href").as_deref(), Some("#wrap-up"));
}

#[wasm_bindgen_test]
async fn copy_feedback_returns_to_idle_on_both_paths() {
    let doc = document();
    let button = doc.create_element("button").expect("button");
    button.set_inner_html(concat!(
        r#"<img class="copy-to-clipboard-icon show" src="/public/images/clipboard-icon.svg" alt="copy to clipboard icon">"#,
        r#"<img class="success-copy-icon" src="/public/images/check.svg" alt="successful copy to clipboard icon">"#,
        r#"<img class="fail-copy-icon" src="/public/images/x.svg" alt="failed copy to clipboard icon">"#,
    ));

    for status_selector in [".success-copy-icon", ".fail-copy-icon"] {
        hooks::flash_status_icon(&button, status_selector).await;

        let copy_icon = button
            .query_selector(".copy-to-clipboard-icon")
            .ok()
            .flatten()
            .expect("copy icon");
        let status_icon = button
            .query_selector(status_selector)
            .ok()
            .flatten()
            .expect("status icon");
        assert!(copy_icon.class_list().contains("show"));
        assert!(!status_icon.class_list().contains("show"));
        assert!(button.get_attribute("disabled").is_none());
    }
}

#[wasm_bindgen_test]
async fn outside_click_closes_share_list_and_resets_label() {
    let root = mount_point();
    yew::Renderer::<ShareMenu>::with_root_and_props(
        root.clone(),
        ShareMenuProps {
            url: "https://example.com/posts/first".into(),
            title: "First Post".into(),
        },
    )
    .render();
    settle().await;

    let toggle: HtmlElement = element_by_id("share-btn").dyn_into().expect("toggle");
    toggle.click();
    settle().await;

    let list = element_by_id("share-links-list");
    assert!(list.class_list().contains("show"));

    document()
        .body()
        .expect("test page has a body")
        .click();
    settle().await;

    assert!(!list.class_list().contains("show"));
    let label = element_by_id("share-copy-link").text_content();
    assert_eq!(label.as_deref(), Some("Copy Link"));

    root.remove();
}

#[wasm_bindgen_test]
fn document_title_falls_back_to_site_name() {
    seo::set_document_title(Some("A Post"));
    assert_eq!(document().title(), "A Post · Savvy Itch");

    seo::set_document_title(None);
    assert_eq!(document().title(), "Savvy Itch");
}
