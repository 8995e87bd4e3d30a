use thiserror::Error;

/// Errors raised while creating, assembling or registering products
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreationError {
    /// The creator has no product mapped to this discriminator
    #[error("creator '{creator}' has no variant for discriminator '{discriminator}'")]
    UnknownVariant {
        creator: String,
        discriminator: String,
    },
    /// A builder operation was called in a state that does not allow it
    #[error("cannot call '{operation}' on a builder in state {state}")]
    InvalidState {
        operation: &'static str,
        state: String,
    },
    #[error("construction failed: {0}")]
    ConstructionFailed(String),
    #[error("discriminator '{0}' is already registered")]
    DuplicateDiscriminator(String),
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl CreationError {
    pub fn unknown_variant(creator: &str, discriminator: &str) -> Self {
        CreationError::UnknownVariant {
            creator: creator.to_string(),
            discriminator: discriminator.to_string(),
        }
    }

    pub fn invalid_state(operation: &'static str, state: impl std::fmt::Display) -> Self {
        CreationError::InvalidState {
            operation,
            state: state.to_string(),
        }
    }

    /// Whether this error came from an unmatched discriminator
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, CreationError::UnknownVariant { .. })
    }

    /// Whether this error came from misuse of a finalized builder
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, CreationError::InvalidState { .. })
    }
}
