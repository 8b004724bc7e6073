use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Parent chain cycle detected at section: {0}")]
    CycleDetected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Failure reported by a [`PageNavigator`](crate::host::PageNavigator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Page '{page}' rejected navigation: {reason}")]
    Rejected { page: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
