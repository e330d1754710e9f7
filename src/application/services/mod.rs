//! Application services
//!
//! Concrete verb implementations. Services depend on the `FileService`
//! boundary trait and implement `VerbHandler`.

mod remove_lines;
mod replace;

pub use remove_lines::{LineRemovalService, RemoveLinesOptions, RemovalReport};
pub use replace::{InFileReplaceOptions, ReplaceReport, TextReplaceService};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::ParsedInvocation;

/// Text value the dispatcher guarantees for required options.
fn required_text(invocation: &ParsedInvocation, name: &'static str) -> ApplicationResult<String> {
    invocation
        .text(name)
        .map(str::to_string)
        .ok_or_else(|| ApplicationError::MissingRequiredParameters {
            verb: invocation.verb,
            names: vec![name],
        })
}
