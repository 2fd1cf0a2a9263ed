use thiserror::Error;

use crate::core::models::Collection;

#[derive(Error, Debug)]
pub enum HadithError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Section {section} of {collection} contains no hadiths")]
    EmptySection { collection: Collection, section: u32 },

    #[error("Could not find a valid hadith section in {collection} after {attempts} attempts")]
    NoValidSection { collection: Collection, attempts: usize },

    #[error("HadithError: {0}")]
    Custom(String),
}

impl HadithError {
    /// Failures that another section might not have. Everything else ends the
    /// generate loop immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HadithError::Fetch { .. } | HadithError::EmptySection { .. })
    }
}

impl From<std::io::Error> for HadithError {
    fn from(error: std::io::Error) -> Self {
        HadithError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for HadithError {
    fn from(error: reqwest::Error) -> Self {
        HadithError::Reqwest(Box::new(error))
    }
}
