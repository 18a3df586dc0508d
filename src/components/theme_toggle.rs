use yew::prelude::*;

use crate::hooks::use_theme::{EffectiveTheme, use_theme};

/// Theme toggle button component
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme_handle = use_theme();

    // Determine icon and label based on effective theme
    let (icon, label) = match theme_handle.effective_theme {
        EffectiveTheme::Dark => ("☀️", "Switch to light mode"),
        EffectiveTheme::Light => ("🌙", "Switch to dark mode"),
    };

    let onclick = {
        let toggle = theme_handle.toggle;
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}
