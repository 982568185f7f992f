use thiserror::Error;

/// Core error type shared across vehigen crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A textual value could not be parsed into its typed form.
    #[error("invalid {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },
}

impl Error {
    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

/// Convenience alias for results returned by vehigen crates.
pub type Result<T> = std::result::Result<T, Error>;
