use crate::errors::DomainError;
use std::fmt;
use std::sync::Arc;

/// Human-facing notices written to the diagnostic stream, separate from
/// findings. Only `InputRead` is reported outside verbose mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    QueryFailed { domain: Arc<str>, error: String },
    NoCname { domain: Arc<str> },
    InputRead { error: String },
}

impl Diagnostic {
    /// Whether this notice is shown even when verbose output is off.
    pub fn is_always_reported(&self) -> bool {
        matches!(self, Diagnostic::InputRead { .. })
    }

    /// Notice for a failure while reading the domain list.
    pub fn input_read(error: &DomainError) -> Self {
        Diagnostic::InputRead {
            error: error.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::QueryFailed { domain, error } => {
                write!(f, "Error querying {}: {}", domain, error)
            }
            Diagnostic::NoCname { domain } => write!(f, "No CNAME for {}", domain),
            Diagnostic::InputRead { error } => write!(f, "Error reading input: {}", error),
        }
    }
}
