use gloo::events::EventListener;
use gloo_storage::Storage;
use gloo_storage::errors::StorageError;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::ThemeError;
use crate::models::theme::Theme;

/// Handle shared through the `ThemeProvider` context
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,           // User's preference
    pub effective_theme: Theme, // Resolved theme, never `System`
    pub set_theme: Callback<Theme>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,

    /// Preference used when localStorage holds nothing
    #[prop_or(Config::DEFAULT_THEME)]
    pub default_theme: Theme,
}

/// Owns the theme state and exposes it to descendants through context
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let default_theme = props.default_theme;

    // Load user preference from localStorage, fallback to the configured default
    let theme = use_state(move || load_theme_preference().unwrap_or(default_theme));

    let system_preference = use_state(detect_system_preference);

    let effective_theme = theme.resolve(*system_preference);

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

    // Effect: Persist theme to localStorage
    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            if let Err(e) = save_theme_preference(*theme) {
                web_sys::console::warn_1(&e.to_string().into());
            }
            || ()
        });
    }

    let set_theme = {
        let theme = theme.setter();
        Callback::from(move |new_theme| theme.set(new_theme))
    };

    let handle = ThemeHandle {
        theme: *theme,
        effective_theme,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<ThemeHandle>>
    }
}

/// Reads the theme context. `None` means no `ThemeProvider` is mounted above
/// the caller.
#[hook]
pub fn use_theme() -> Option<ThemeHandle> {
    use_context::<ThemeHandle>()
}

/// Detect system's preferred color scheme
fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media(Config::DARK_MEDIA_QUERY).ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

/// Apply theme to DOM: `data-theme` attribute plus the `dark` class on <html>
fn apply_theme_to_dom(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let theme_str = theme.as_str();
    if html
        .set_attribute(Config::THEME_ATTRIBUTE, theme_str)
        .and_then(|()| {
            html.class_list()
                .toggle_with_force(Config::DARK_CLASS, theme.is_dark())
                .map(|_| ())
        })
        .is_err()
    {
        web_sys::console::warn_1(&format!("Failed to apply theme '{theme_str}' to document").into());
    }
}

/// Load theme preference from localStorage
fn load_theme_preference() -> Option<Theme> {
    match gloo_storage::LocalStorage::get(Config::STORAGE_KEY) {
        Ok(theme) => Some(theme),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            let error = ThemeError::Storage(e.to_string());
            web_sys::console::warn_1(&format!("{error}, using default theme").into());
            None
        }
    }
}

/// Save theme preference to localStorage
fn save_theme_preference(theme: Theme) -> Result<(), ThemeError> {
    gloo_storage::LocalStorage::set(Config::STORAGE_KEY, theme)
        .map_err(|e| ThemeError::Storage(format!("failed to save theme: {e}")))
}

/// Setup MediaQueryList event listener for system preference changes
fn setup_media_query_listener(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    web_sys::window()
        .and_then(|w| w.match_media(Config::DARK_MEDIA_QUERY).ok().flatten())
        .map(|mq| {
            EventListener::new(&mq, "change", move |_event| {
                setter.set(detect_system_preference());
            })
        })
}
