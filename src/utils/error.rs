use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error in '{field}': {reason}")]
    ValidationError { field: String, reason: String },
}

impl CalcError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "Use a non-zero divisor",
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::ConfigError { .. } => "Make sure the scenario file is valid TOML",
            CalcError::ValidationError { .. } => {
                "Every [[step]] needs a non-empty label, and at least one step is required"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
