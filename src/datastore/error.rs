use thiserror::*;

#[derive(Debug, PartialEq, Error)]
pub enum DataStoreError {
    #[error("storage returned error: {0}")]
    Storage(String),
}

// Keep the driver message intact; it is logged server-side and never shown
// to API clients.
impl From<sqlx::Error> for DataStoreError {
    fn from(err: sqlx::Error) -> Self {
        DataStoreError::Storage(err.to_string())
    }
}
