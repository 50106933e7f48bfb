// src/error.rs
// =============================================================================
// Error types for fetching repositories and writing pages.
//
// Every failure is fatal to the run: nothing here is retried or recovered,
// it is only given a name and propagated with `?` up to main.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    /// The HTTP call failed (DNS, connection, TLS, non-2xx status).
    #[error("request to GitHub API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a JSON array of objects.
    #[error("could not parse repository listing: {0}")]
    Parse(#[from] serde_json::Error),

    /// A repository object is missing a field the page needs.
    #[error("repository object has no `{0}` field")]
    MissingField(String),

    /// A repository field is present but has the wrong JSON type.
    #[error("repository field `{field}` is not {expected}")]
    InvalidField { field: String, expected: &'static str },

    #[error("malformed page template: {0}")]
    MalformedTemplate(String),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid API base URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, PageError>;
