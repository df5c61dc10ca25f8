use serde::{Deserialize, Serialize};

/// Theme enum representing the user's theme preference
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System, // Follow system preference
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// The theme a toggle switches to: `Dark` goes to `Light`, everything else
    /// (including `System`) goes to `Dark`.
    pub const fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Resolve `System` against the detected preference. The result is always
    /// `Light` or `Dark`.
    pub const fn resolve(self, system_preference: Theme) -> Theme {
        match self {
            Theme::System => match system_preference {
                Theme::Dark => Theme::Dark,
                _ => Theme::Light,
            },
            other => other,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Which of the two glyphs is shown for a resolved theme
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GlyphVisibility {
    pub sun: bool,
    pub moon: bool,
}

impl GlyphVisibility {
    pub const fn for_theme(effective_theme: Theme) -> Self {
        let dark = effective_theme.is_dark();
        Self {
            sun: !dark,
            moon: dark,
        }
    }
}
