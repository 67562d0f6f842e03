use std::fmt;

// A single entry of an error list returned to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub msg: String,
    pub error: Option<String>,
}

impl ErrorDetail {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

// Failures of the per-request processing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    // Unexpected failure; surfaces as a 500 carrying the message.
    Internal(String),
    // The step refused the query and produced client-facing errors.
    Rejected(Vec<ErrorDetail>),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Internal(message) => write!(f, "internal processing error: {message}"),
            ProcessError::Rejected(details) => {
                write!(f, "query rejected with {} error(s)", details.len())
            }
        }
    }
}

impl std::error::Error for ProcessError {}
