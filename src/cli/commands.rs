//! Top-level command flow: parse, run, report

use std::ffi::OsString;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ExitOutcome};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, usage};
use crate::domain::ParsedInvocation;
use crate::infrastructure::di::ServiceContainer;

/// Dispatch raw arguments (program name excluded) into an invocation.
pub fn parse<I, T>(container: &ServiceContainer, args: I) -> CliResult<ParsedInvocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Ok(container.dispatcher.dispatch(args)?)
}

/// Hand a validated invocation to its handler.
#[instrument(level = "debug", skip(container), fields(verb = invocation.verb))]
pub fn run(container: &ServiceContainer, invocation: &ParsedInvocation) -> CliResult<ExitOutcome> {
    let outcome = container.handlers.handle(invocation)?;
    debug!("run: exit code {}", outcome.exit_code());
    Ok(outcome)
}

/// Render an error (or a help/version request) for the user.
pub fn report(container: &ServiceContainer, err: &CliError) {
    let registry = container.dispatcher.registry();
    let Some(app) = err.application() else {
        output::error(err);
        return;
    };

    match app {
        ApplicationError::HelpRequested { verb: None } => {
            output::info(&usage::overview(registry));
            output::info(&format!("\n{}", usage::configuration(&container.settings)));
        }
        ApplicationError::HelpRequested { verb: Some(verb) } => match registry.lookup(verb) {
            Ok(schema) => output::info(&usage::verb_help(schema)),
            Err(_) => output::info(&usage::overview(registry)),
        },
        ApplicationError::VersionRequested => {
            output::info(&format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
        }
        ApplicationError::NoVerbSelected { .. } | ApplicationError::UnknownVerb { .. } => {
            output::error(app);
            output::info_err(&usage::overview(registry));
        }
        e if e.is_usage() => {
            output::error(e);
            if let Some(schema) = e.verb().and_then(|v| registry.lookup(v).ok()) {
                output::info_err(&usage::verb_help(schema));
            }
        }
        ApplicationError::InvalidPattern { source, .. } => {
            output::error(app);
            output::hint(source);
        }
        _ => output::error(app),
    }
}

/// Render a failed outcome.
pub fn report_outcome(outcome: &ExitOutcome) {
    if let ExitOutcome::Failure { message, .. } = outcome {
        output::error(message);
    }
}
