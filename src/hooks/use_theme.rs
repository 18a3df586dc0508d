use gloo::events::EventListener;
use web_sys::wasm_bindgen::JsCast;
use yew::prelude::*;

use super::use_store::use_store;
use crate::store::{StoreAction, Theme};

/// Resolved theme applied to the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

/// Resolves a preference against the system setting.
pub fn resolve_theme(preference: Theme, system: EffectiveTheme) -> EffectiveTheme {
    match preference {
        Theme::Light => EffectiveTheme::Light,
        Theme::Dark => EffectiveTheme::Dark,
        Theme::System => system,
    }
}

/// Handle returned by use_theme hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,                    // User's preference
    pub effective_theme: EffectiveTheme, // Resolved theme
    pub toggle: Callback<()>,
    pub set_theme: Callback<Theme>,
}

/// Custom hook for theme management backed by the app store
#[hook]
pub fn use_theme() -> ThemeHandle {
    let store = use_store();
    let theme = store.as_ref().map_or(Theme::System, |store| store.theme);

    // Detect system preference
    let system_preference = use_state(detect_system_preference);
    let effective_theme = resolve_theme(theme, *system_preference);

    // Effect: Apply theme to DOM
    use_effect_with(effective_theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    // Effect: Listen to system preference changes
    {
        let system_preference = system_preference.clone();
        use_effect_with((), move |_| {
            let listener = setup_media_query_listener(system_preference.setter());
            move || drop(listener)
        });
    }

    // Toggle callback: switches between Light and Dark
    let toggle = {
        let store = store.clone();
        Callback::from(move |()| {
            if let Some(store) = &store {
                let next = match effective_theme {
                    EffectiveTheme::Dark => Theme::Light,
                    EffectiveTheme::Light => Theme::Dark,
                };
                store.dispatch(StoreAction::SetTheme(next));
            }
        })
    };

    let set_theme = Callback::from(move |new_theme| {
        if let Some(store) = &store {
            store.dispatch(StoreAction::SetTheme(new_theme));
        }
    });

    ThemeHandle {
        theme,
        effective_theme,
        toggle,
        set_theme,
    }
}

/// Detect system's preferred color scheme
fn detect_system_preference() -> EffectiveTheme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(EffectiveTheme::Light, |mq| {
            if mq.matches() {
                EffectiveTheme::Dark
            } else {
                EffectiveTheme::Light
            }
        })
}

/// Apply theme to DOM by setting data-theme attribute on <html>
fn apply_theme_to_dom(theme: EffectiveTheme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.as_str());
    }
}

/// Setup MediaQueryList event listener for system preference changes
fn setup_media_query_listener(setter: UseStateSetter<EffectiveTheme>) -> Option<EventListener> {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .and_then(|mq| mq.dyn_into::<web_sys::EventTarget>().ok())
        .map(|target| {
            EventListener::new(&target, "change", move |_event| {
                setter.set(detect_system_preference());
            })
        })
}
