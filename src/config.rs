use crate::models::theme::Theme;

/// Configuration constants for the theme toggle
pub struct Config;

impl Config {
    /// localStorage key holding the user's theme preference
    pub const STORAGE_KEY: &'static str = "theme";

    /// Attribute set on `<html>` with the resolved theme
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";

    /// Class toggled on `<html>` while the dark theme is active
    pub const DARK_CLASS: &'static str = "dark";

    /// Media query used to detect the system preference
    pub const DARK_MEDIA_QUERY: &'static str = "(prefers-color-scheme: dark)";

    /// Preference used when nothing is stored yet
    pub const DEFAULT_THEME: Theme = Theme::System;

    /// Accessible label of the toggle, independent of state
    pub const TOGGLE_LABEL: &'static str = "Toggle theme";
}
