use std::str::FromStr;

use leptos::{component, provide_context, use_context, Children, IntoView};

/// Visual variant of the app. Injected once at the top of the tree and read
/// back by any component that renders theme-dependent classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl FromStr for Theme {
    type Err = core::convert::Infallible;

    // the theme switcher emits "dark"; anything else falls back to light
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            _ => Ok(Theme::Light),
        }
    }
}

/// Put a read-only [`Theme`] into context for the whole subtree.
#[component]
pub fn ThemeProvider(#[prop(optional)] theme: Theme, children: Children) -> impl IntoView {
    provide_context(theme);
    children()
}

/// Read the ambient theme, defaulting to light outside a provider.
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

// region:    --- Tests


// endregion: --- Tests
