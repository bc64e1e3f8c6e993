/// Failure reported by a data service collaborator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("service responded with HTTP {status}")]
    Http { status: u16 },
    #[error("malformed service response: {0}")]
    Parse(String),
}
