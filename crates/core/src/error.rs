#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The backing store could not serve the request.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
