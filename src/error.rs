//! Error types shared by the store, the upstream source and the resolvers

use async_graphql::ErrorExtensions;

pub type Result<T> = std::result::Result<T, PhonebookError>;

#[derive(Debug, thiserror::Error)]
pub enum PhonebookError {
    /// A record with this name already exists
    #[error("Duplicate name: {name}")]
    DuplicateInput { name: String },

    /// The upstream record source could not be reached or returned bad data
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetchFailure(String),

    /// Input rejected before it reached the store
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl PhonebookError {
    /// Stable code placed under `extensions.code`
    pub fn code(&self) -> &'static str {
        match self {
            PhonebookError::DuplicateInput { .. } | PhonebookError::Validation(_) => {
                "BAD_USER_INPUT"
            }
            PhonebookError::UpstreamFetchFailure(_) => "UPSTREAM_FETCH_FAILED",
        }
    }
}

impl ErrorExtensions for PhonebookError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let PhonebookError::DuplicateInput { name } = self {
                e.set("invalidArgs", name.as_str());
            }
        })
    }
}
