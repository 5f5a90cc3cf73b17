use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("name not specified")]
    NameNotSpecified,

    #[error("number not specified")]
    NumberNotSpecified,

    #[error("unable to parse number as float")]
    NumberNotFloat,

    #[error("name not defined")]
    NameNotDefined,

    #[error("unimplemented")]
    Unimplemented,

    #[error("resource {name} must be rebuilt to apply a new config")]
    MustRebuild { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid model or API triplet '{value}': {reason}")]
    InvalidModel { value: String, reason: String },

    #[error("Model {model} is already registered for API {api}")]
    DuplicateRegistration { api: String, model: String },

    #[error("No registration for model {model} with API {api}")]
    UnknownModel { api: String, model: String },

    #[error("Resource not found: {name}")]
    ResourceNotFound { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Command,
    Config,
    Registry,
    System,
}

impl ModuleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ModuleError::NameNotSpecified
            | ModuleError::NumberNotSpecified
            | ModuleError::NumberNotFloat
            | ModuleError::NameNotDefined
            | ModuleError::Unimplemented => ErrorCategory::Command,
            ModuleError::MustRebuild { .. }
            | ModuleError::Config { .. }
            | ModuleError::InvalidConfigValue { .. }
            | ModuleError::InvalidModel { .. } => ErrorCategory::Config,
            ModuleError::DuplicateRegistration { .. }
            | ModuleError::UnknownModel { .. }
            | ModuleError::ResourceNotFound { .. } => ErrorCategory::Registry,
            ModuleError::Io(_) | ModuleError::Serialization(_) => ErrorCategory::System,
        }
    }

    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config | ErrorCategory::Registry => 1,
            ErrorCategory::Command => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ModuleError::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModuleError>;
