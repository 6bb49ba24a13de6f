use thiserror::Error;

/// Why a tree mutation or document load did not happen.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("member not found: {0}")]
    NotFound(String),
    #[error("the root member cannot be removed or moved")]
    RootProtected,
    #[error("duplicate member id: {0}")]
    DuplicateId(String),
    #[error("invalid tree document: {0}")]
    InvalidDocument(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TreeError {
    /// Stable machine-readable tag for the front end.
    pub fn kind(&self) -> &'static str {
        match self {
            TreeError::NotFound(_) => "not_found",
            TreeError::RootProtected => "root_protected",
            TreeError::DuplicateId(_) => "duplicate_id",
            TreeError::InvalidDocument(_) => "invalid_document",
            TreeError::Json(_) => "json",
        }
    }
}
