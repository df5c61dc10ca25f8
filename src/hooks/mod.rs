pub mod use_theme;

pub use use_theme::{ThemeHandle, ThemeProvider, use_theme};
