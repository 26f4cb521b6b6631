/// Error types for the sortwind library
#[derive(Debug)]
pub enum SortwindError {
    /// A configured class pattern or separator failed to compile
    Pattern(regex::Error),
    /// Settings could not be read or parsed
    Config(String),
}

impl std::fmt::Display for SortwindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortwindError::Pattern(err) => write!(f, "Invalid pattern: {}", err),
            SortwindError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SortwindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortwindError::Pattern(err) => Some(err),
            SortwindError::Config(_) => None,
        }
    }
}

impl From<regex::Error> for SortwindError {
    fn from(err: regex::Error) -> Self {
        SortwindError::Pattern(err)
    }
}

/// Result type for sortwind operations
pub type SortwindResult<T> = Result<T, SortwindError>;
