//! Theme picker dropdown.

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::theme::{Theme, ThemeContext};

/// Properties for [`ThemeSelect`].
#[derive(Properties, PartialEq)]
pub struct ThemeSelectProps {
    /// Element id; the desktop and mobile instances keep the ids the
    /// stylesheet targets.
    pub id: AttrValue,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// One theme picker. Every instance renders from the shared
/// [`ThemeContext`], so the desktop and mobile pickers always mirror each
/// other after any change.
#[function_component(ThemeSelect)]
pub fn theme_select(props: &ThemeSelectProps) -> Html {
    let ctx = use_context::<ThemeContext>().expect("ThemeSelect used outside ThemeProvider");
    let selected = ctx.theme;
    let select_ref = use_node_ref();

    // The `selected` attribute only controls an option until the user has
    // interacted with this select; after that the browser ignores attribute
    // changes. Writing the live value keeps an already-touched picker in
    // sync when the other picker changes the shared theme.
    {
        let select_ref = select_ref.clone();
        use_effect_with(selected, move |theme| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(theme.as_str());
            }
            || ()
        });
    }

    let onchange = {
        let on_change = ctx.on_change.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            on_change.emit(Theme::parse(&select.value()));
        })
    };

    html! {
        <select
            id={props.id.clone()}
            ref={select_ref}
            class={classes!("color-theme-select", props.class.clone())}
            aria-label="Color theme"
            {onchange}
        >
            { for [Theme::System, Theme::Light, Theme::Dark].into_iter().map(|theme| html! {
                <option value={theme.as_str()} selected={theme == selected}>
                    { option_label(theme) }
                </option>
            }) }
        </select>
    }
}

fn option_label(theme: Theme) -> &'static str {
    match theme {
        Theme::System => "System",
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    }
}
