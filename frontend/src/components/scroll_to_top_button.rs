//! Floating scroll-to-top control.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

/// The button appears once the page has scrolled past one viewport height.
fn past_threshold(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height
}

/// Scroll-to-top button, hidden until the reader is a full viewport down.
#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_effect_with((), move |_| {
            let window = window().expect("no global `window` exists");
            // Captured once at load; resize churn is not tracked.
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);

            let closure = {
                let show = show.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    show.set(past_threshold(scroll_y, viewport_height));
                }) as Box<dyn Fn()>)
            };

            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());

            let cleanup = move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                );
                drop(closure);
            };

            move || cleanup()
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();

        if let Some(window) = window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_top(0.0);
            options.set_left(0.0);

            window.scroll_with_scroll_to_options(&options);
        }
    });

    if *show {
        html! {
            <button
                id="up-btn"
                class="up-btn"
                onclick={onclick}
                aria-label="Scroll to top"
                title="Scroll to top"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <polyline points="18 15 12 9 6 15"></polyline>
                </svg>
            </button>
        }
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_threshold_is_strict() {
        let viewport = 768.0;
        assert!(!past_threshold(viewport - 1.0, viewport));
        assert!(!past_threshold(viewport, viewport));
        assert!(past_threshold(viewport + 1.0, viewport));
    }
}
