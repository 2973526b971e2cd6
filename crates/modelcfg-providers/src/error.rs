/// Errors produced while resolving implicit providers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A profile override for a known provider is malformed.
    #[error("invalid override for provider '{provider}', field '{field}': {reason}")]
    InvalidOverride {
        provider: String,
        field: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_override(
        provider: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOverride {
            provider: provider.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
