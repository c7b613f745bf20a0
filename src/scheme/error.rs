use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("Invalid version '{version}'")]
    InvalidVersion { version: String },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Cannot bump segment {segment} (value {value}) by {num}: result would be below {floor}")]
    Underflow {
        segment: usize,
        value: u64,
        num: i64,
        floor: u64,
    },

    #[error("Ambiguous bump: {0}")]
    AmbiguousBump(String),

    #[error("Bumping segment {segment} overflows")]
    Overflow { segment: usize },
}

impl SchemeError {
    pub(crate) fn invalid_version(version: &str) -> Self {
        SchemeError::InvalidVersion {
            version: version.to_string(),
        }
    }
}
