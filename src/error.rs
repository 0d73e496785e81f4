use thiserror::Error;

#[derive(Debug, Error)]
pub enum PetronormError {
    #[error("Rule config error: {0}")]
    RuleConfig(String),

    #[error("Invalid conversion rule {source_key} -> {dest}: {reason}")]
    InvalidRule {
        source_key: String,
        dest: String,
        reason: String,
    },

    #[error("Input error: {0}")]
    Input(String),
}

impl From<PetronormError> for String {
    fn from(err: PetronormError) -> Self {
        err.to_string()
    }
}
