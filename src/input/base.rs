use std::fmt::{self, Debug};

/// Error raised when a request is built from inputs that violate its
/// well-formedness rules. Construction is the only fallible operation;
/// an unacceptable operator answer is a plain `false` from `is_valid`,
/// never an error.
#[derive(Debug)]
pub struct InvalidArgument {
    pub message: String,
    pub details: Option<String>,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidArgument {}

/// A single question posed to the operator.
///
/// Implementations bundle the question text with the rule deciding
/// whether a raw answer is acceptable, so the console driver stays
/// agnostic of the concrete question type. Requests are immutable
/// values: both operations are pure reads and safe to call repeatedly
/// or from multiple threads.
pub trait InputRequest: Send + Sync + Debug {
    /// The full text to display, including any hint about what counts
    /// as a valid answer. Single line, deterministic.
    fn prompt(&self) -> String;

    /// Whether `answer` is an acceptable response to this question.
    fn is_valid(&self, answer: &str) -> bool;
}
