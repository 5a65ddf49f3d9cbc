use thiserror::Error;

/// Failures the editor can hit outside its own logic.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The persistent key-value store could not be read or written.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// The bootstrap fetch failed or returned a non-success status.
    #[error("fetch failed for {url}: {reason}")]
    Network { url: String, reason: String },
}
