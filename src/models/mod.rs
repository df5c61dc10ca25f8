pub mod error;
pub mod theme;
