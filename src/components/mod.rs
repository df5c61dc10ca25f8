pub mod button;
pub mod icons;
pub mod theme_toggle;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::{MoonIcon, SunIcon};
pub use theme_toggle::ThemeToggleButton;
