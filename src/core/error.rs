use thiserror::Error;

/// Failure of a provider operation.
///
/// `NotFound` and `Invalid` are the data-level outcomes the provider signals for
/// unresolved or ill-formed identifiers. `MissingParameter`, `TooManyArguments`
/// and `MalformedParameter` are raised before any store access. Everything else
/// is `Unexpected`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("No data available: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("{operation}() missing required argument: '{parameter}'")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("{operation}() takes at most {max} arguments ({given} given)")]
    TooManyArguments {
        operation: &'static str,
        max: usize,
        given: usize,
    },

    #[error("Malformed value for '{parameter}': '{value}' is not an integer")]
    MalformedParameter {
        parameter: &'static str,
        value: String,
    },

    #[error("Unexpected provider failure: {0}")]
    Unexpected(String),
}

impl ProviderError {
    /// Stable machine-readable tag, used as `error_type` in HTTP error bodies
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Invalid(_) => "invalid_input",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::TooManyArguments { .. } => "too_many_arguments",
            Self::MalformedParameter { .. } => "malformed_parameter",
            Self::Unexpected(_) => "internal_error",
        }
    }

    /// True for the failures detected from the arguments alone
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::TooManyArguments { .. }
                | Self::MalformedParameter { .. }
        )
    }
}

impl From<tokio_postgres::Error> for ProviderError {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(format!("serialization failed: {err}"))
    }
}
