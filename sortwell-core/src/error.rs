use sortwell_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComparatorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),
}

/// Raised while a comparator or chain is being assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "no value comparator supplied for field [{}]",
        .path.as_deref().unwrap_or("")
    )]
    MissingComparator { path: Option<String> },

    #[error(transparent)]
    InvalidOptions(#[from] ModelError),
}

/// Raised while resolving a field path against an object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("field [{segment}] was not found on object [{object}]")]
    MissingField { segment: String, object: String },

    #[error("object [{object}] has no natural order")]
    NotOrderable { object: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("cannot compare {left} with {right}")]
    Incomparable {
        left: &'static str,
        right: &'static str,
    },
}

impl From<ModelError> for ComparatorError {
    fn from(err: ModelError) -> Self {
        ComparatorError::Config(ConfigError::InvalidOptions(err))
    }
}

pub type Result<T> = std::result::Result<T, ComparatorError>;
