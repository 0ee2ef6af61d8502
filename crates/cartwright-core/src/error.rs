use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors the engine surfaces to callers.
///
/// Deliberately sparse: a malformed persisted cart is *not* an error (the
/// slot silently loads as empty), and a rejected coupon is a
/// [`Notice`](crate::widget::Notice), not a failure. What remains is storage
/// writes going wrong and explicitly requested files that cannot be used.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("storage write failed for slot `{slot}`: {source}")]
    Storage {
        slot: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read shop config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid shop config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("product `{0}` is not in the catalog")]
    UnknownProduct(String),
}
