#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ThemeError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No ThemeProvider mounted above this component")]
    MissingProvider,
}
