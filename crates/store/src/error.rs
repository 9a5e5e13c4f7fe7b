use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint was violated.
    #[error("{entity} already exists: {detail}")]
    Duplicate {
        entity: &'static str,
        detail: String,
    },

    /// An update/delete targeted a record that does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The store's lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn duplicate(entity: &'static str, detail: impl Into<String>) -> Self {
        Self::Duplicate {
            entity,
            detail: detail.into(),
        }
    }
}
