use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A page identifier outside the known set reached navigation.
    #[error("invalid state: unknown page '{page}'")]
    InvalidState { page: String },

    #[error("failed to parse site content: {0}")]
    Content(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
