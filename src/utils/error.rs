use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Invalid name: value is empty or whitespace-only")]
    InvalidInput,

    #[error("Duplicate name: {name} is already on the roster")]
    DuplicateName { name: String },

    #[error("Insufficient participants: {actual} registered, at least {required} required")]
    InsufficientParticipants { required: usize, actual: usize },

    #[error("Length mismatch: original has {original} entries, shuffled has {shuffled}")]
    LengthMismatch { original: usize, shuffled: usize },

    #[error("Participant {name} is missing from the shuffled sequence")]
    UnknownParticipant { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// User input was rejected; nothing changed.
    Low,
    /// The environment (files, config) needs attention.
    Medium,
    /// Output could not be produced.
    High,
    /// Internal invariant broken.
    Critical,
}

impl DrawError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrawError::InvalidInput
            | DrawError::DuplicateName { .. }
            | DrawError::InsufficientParticipants { .. } => ErrorSeverity::Low,
            DrawError::ConfigError { .. } | DrawError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            DrawError::IoError(_)
            | DrawError::SerializationError(_)
            | DrawError::CsvError(_)
            | DrawError::EncodingError(_) => ErrorSeverity::High,
            DrawError::LengthMismatch { .. } | DrawError::UnknownParticipant { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Whether the session can carry on after this error with its state intact.
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    /// Whether the input collaborator is expected to clear the rejected text.
    pub fn clears_input(&self) -> bool {
        matches!(self, DrawError::DuplicateName { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrawError::InvalidInput => "Enter a valid name!".to_string(),
            DrawError::DuplicateName { .. } => "This name has already been added!".to_string(),
            DrawError::InsufficientParticipants { required, .. } => {
                format!("Add at least {} people to the draw!", required)
            }
            DrawError::LengthMismatch { .. } | DrawError::UnknownParticipant { .. } => {
                "The draw could not be completed due to an internal error.".to_string()
            }
            DrawError::IoError(e) => format!("Could not read or write a file: {}", e),
            DrawError::SerializationError(_)
            | DrawError::CsvError(_)
            | DrawError::EncodingError(_) => "Could not format the draw result.".to_string(),
            DrawError::ConfigError { message } => format!("Configuration problem: {}", message),
            DrawError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrawError::InvalidInput => "Type a name that is not blank.",
            DrawError::DuplicateName { .. } => {
                "Names are compared ignoring case; use a distinguishing name."
            }
            DrawError::InsufficientParticipants { .. } => "Add more participants and draw again.",
            DrawError::LengthMismatch { .. } | DrawError::UnknownParticipant { .. } => {
                "Please report this as a bug."
            }
            DrawError::IoError(_) => "Check that the output path exists and is writable.",
            DrawError::SerializationError(_)
            | DrawError::CsvError(_)
            | DrawError::EncodingError(_) => "Try a different output format.",
            DrawError::ConfigError { .. } | DrawError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;
