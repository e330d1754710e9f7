//! Application-level errors

use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

/// Parse-time, pattern, I/O and config failures.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("no verb selected")]
    NoVerbSelected { available: Vec<&'static str> },

    #[error("unknown verb: {verb}")]
    UnknownVerb {
        verb: String,
        available: Vec<&'static str>,
    },

    /// Unknown tokens, plus any required options that were also absent.
    #[error("{verb}: unknown option(s): {}{}", .tokens.iter().join(", "), missing_suffix(.missing))]
    UnknownOption {
        verb: &'static str,
        tokens: Vec<String>,
        missing: Vec<&'static str>,
    },

    #[error("{verb}: missing required option(s): {}", option_list(.names))]
    MissingRequiredParameters {
        verb: &'static str,
        names: Vec<&'static str>,
    },

    #[error("{verb}: invalid value for '{token}': {message}")]
    ValueFormat {
        verb: &'static str,
        token: String,
        message: String,
    },

    #[error("{verb}: invalid argument --{name}: {message}")]
    InvalidArgument {
        verb: &'static str,
        name: &'static str,
        message: String,
    },

    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("help requested")]
    HelpRequested { verb: Option<&'static str> },

    #[error("version requested")]
    VersionRequested,
}

impl ApplicationError {
    /// True for mistakes in the command line itself.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ApplicationError::NoVerbSelected { .. }
                | ApplicationError::UnknownVerb { .. }
                | ApplicationError::UnknownOption { .. }
                | ApplicationError::MissingRequiredParameters { .. }
                | ApplicationError::ValueFormat { .. }
                | ApplicationError::InvalidArgument { .. }
        )
    }

    /// Verb whose usage should accompany this error, if any.
    pub fn verb(&self) -> Option<&'static str> {
        match self {
            ApplicationError::UnknownOption { verb, .. }
            | ApplicationError::MissingRequiredParameters { verb, .. }
            | ApplicationError::ValueFormat { verb, .. }
            | ApplicationError::InvalidArgument { verb, .. } => Some(verb),
            ApplicationError::HelpRequested { verb } => *verb,
            _ => None,
        }
    }
}

fn option_list(names: &[&str]) -> String {
    names.iter().map(|n| format!("--{n}")).join(", ")
}

fn missing_suffix(missing: &[&str]) -> String {
    if missing.is_empty() {
        String::new()
    } else {
        format!("; missing required option(s): {}", option_list(missing))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
