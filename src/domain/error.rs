use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("unknown application: {0}")]
    UnknownApp(String),

    /// The backend rejected the request. Carries its text as-is.
    #[error("{0}")]
    Backend(String),

    #[error("malformed status reply: {0}")]
    MalformedStatus(String),
}
