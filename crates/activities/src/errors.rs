use std::fmt;

/// Errors an activity surfaces to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityError {
    /// A required input field was not populated
    MissingInput(&'static str),
    /// An input was present but not usable (e.g. unknown join type)
    InvalidArgument(String),
    /// The underlying table operation failed
    Execution(executor::ExecutorError),
}

impl fmt::Display for ActivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityError::MissingInput(field) => {
                write!(f, "Required input '{}' is not set", field)
            }
            ActivityError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ActivityError::Execution(err) => write!(f, "Execution failed: {}", err),
        }
    }
}

impl std::error::Error for ActivityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActivityError::Execution(err) => Some(err),
            _ => None,
        }
    }
}

impl From<executor::ExecutorError> for ActivityError {
    fn from(err: executor::ExecutorError) -> Self {
        ActivityError::Execution(err)
    }
}
