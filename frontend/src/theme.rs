//! Persisted color-theme preference.
//!
//! The preference lives under one localStorage key; absence means "follow
//! the system". The active choice is mirrored onto the document element as
//! `data-theme` so the stylesheet can react, and shared through a context
//! so the desktop and mobile pickers never disagree.

use web_sys::{window, Storage};
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

/// A color-theme choice. `System` is the sentinel for "no override" and is
/// never written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Forced light theme.
    Light,
    /// Forced dark theme.
    Dark,
    /// Follow the OS preference.
    #[default]
    System,
}

impl Theme {
    /// Value as shown by the pickers and stamped on the document element.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Parse a picker or storage value; anything unknown falls back to
    /// `System`.
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// The string persisted to storage, or `None` for the `System` sentinel.
    pub fn persisted_value(self) -> Option<&'static str> {
        match self {
            Theme::System => None,
            other => Some(other.as_str()),
        }
    }
}

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Read the persisted preference. Absence, or storage being unavailable,
/// means `System`.
pub fn load() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Persist `theme`, clearing the key first so the `System` sentinel leaves
/// nothing behind. Storage being unavailable is not an error: the in-page
/// state keeps working for the current session.
pub fn store(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.remove_item(STORAGE_KEY);
    if let Some(value) = theme.persisted_value() {
        let _ = storage.set_item(STORAGE_KEY, value);
    }
}

/// Reflect the choice on the document element so CSS can pick it up.
pub fn apply(theme: Theme) {
    let Some(root) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    match theme.persisted_value() {
        Some(value) => {
            let _ = root.set_attribute("data-theme", value);
        },
        None => {
            let _ = root.remove_attribute("data-theme");
        },
    }
}

/// Shared handle letting any picker read and change the active theme.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    /// Currently selected theme.
    pub theme: Theme,
    /// Emitting a theme persists it, applies it, and re-renders all pickers.
    pub on_change: Callback<Theme>,
}

/// Properties for [`ThemeProvider`].
#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Wrapped subtree.
    #[prop_or_default]
    pub children: Html,
}

/// Owns the theme state and exposes it to every picker via context.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(load);

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            apply(*theme);
            || ()
        });
    }

    let on_change = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            store(next);
            apply(next);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        on_change,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}
