//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// The application error underneath, if any.
    pub fn application(&self) -> Option<&ApplicationError> {
        match self {
            CliError::Infra(InfraError::Application(e)) => Some(e),
            CliError::Infra(InfraError::Registry(_)) => None,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use crate::exitcode;

        let Some(e) = self.application() else {
            return exitcode::SOFTWARE;
        };
        match e {
            ApplicationError::HelpRequested { .. } | ApplicationError::VersionRequested => {
                exitcode::OK
            }
            e if e.is_usage() => exitcode::USAGE,
            ApplicationError::FileNotFound(_) => exitcode::NOINPUT,
            ApplicationError::Io { .. } => exitcode::IOERR,
            ApplicationError::InvalidPattern { .. } => exitcode::DATAERR,
            ApplicationError::Config { .. } => exitcode::CONFIG,
            _ => exitcode::SOFTWARE,
        }
    }
}
