use thiserror::Error;

pub const RANGE_MESSAGE: &str = "Wrong number range. It should be in [1000, 9999].";
pub const MALFORMED_MESSAGE: &str = "Wrong input. It should be a single integer.";

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Number out of range: {value}")]
    OutOfRange { value: String },

    #[error("Malformed input: {input:?}")]
    MalformedInput { input: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CheckError {
    pub fn out_of_range(value: impl ToString) -> Self {
        CheckError::OutOfRange {
            value: value.to_string(),
        }
    }

    pub fn malformed(input: impl Into<String>) -> Self {
        CheckError::MalformedInput {
            input: input.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CheckError::MalformedInput { .. } => ErrorSeverity::Medium,
            CheckError::OutOfRange { .. } => ErrorSeverity::High,
            CheckError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// The line printed for the user. Range and input errors are part of the
    /// program's normal stdout contract; IO failures are not.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::OutOfRange { .. } => RANGE_MESSAGE.to_string(),
            CheckError::MalformedInput { .. } => MALFORMED_MESSAGE.to_string(),
            CheckError::Io(e) => format!("Failed to read standard input: {}", e),
        }
    }

    pub fn is_reported_on_stdout(&self) -> bool {
        !matches!(self, CheckError::Io(_))
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::OutOfRange { .. } => "Provide a four-digit number between 1000 and 9999",
            CheckError::MalformedInput { .. } => "Provide exactly one decimal integer on stdin",
            CheckError::Io(_) => "Check that standard input is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
