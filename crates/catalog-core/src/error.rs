//! Error taxonomy for catalog operations

use camino::Utf8PathBuf;
use thiserror::Error;

/// Every way a catalog operation can fail.
///
/// None of these are fatal: the store stays usable after any of them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Backing file could not be read or written.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file exists but is not a JSON array of products.
    #[error("malformed catalog file {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory catalog could not be encoded.
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A required field is missing, empty or zero.
    #[error("invalid product: {0}")]
    Validation(String),

    /// Another product already uses this code.
    #[error("a product with code '{code}' already exists")]
    DuplicateCode { code: String },

    /// No product carries this id.
    #[error("product {id} not found")]
    NotFound { id: u64 },

    /// The id counter cannot move past the largest id in use.
    #[error("no ids left to assign after {max_id}")]
    IdsExhausted { max_id: u64 },
}

impl CatalogError {
    /// True for rejections caused by the caller's input rather than the environment.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::DuplicateCode { .. } | Self::NotFound { .. }
        )
    }
}

/// Convenience alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;
