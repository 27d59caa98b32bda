use thiserror::Error;

/// Error taxonomy shared by both handlers.
///
/// Messages are carried verbatim to the wire, so variants hold the exact
/// caller-facing text. A duplicate like is not an error and is therefore not
/// represented here; see `WriteOutcome`.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// A required identifier is missing from the request.
    #[error("{0}")]
    Validation(String),

    /// The recipe source was unreachable or returned a malformed payload.
    #[error("{0}")]
    Upstream(String),

    /// The like store failed for any reason other than a condition failure.
    #[error("{0}")]
    Store(String),
}
