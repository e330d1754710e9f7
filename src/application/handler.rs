//! Invocation contract between the dispatcher and verb implementations

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::domain::ParsedInvocation;
use crate::exitcode;

/// How a handled invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    Failure { code: i32, message: String },
}

impl ExitOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            ExitOutcome::Success => exitcode::OK,
            ExitOutcome::Failure { code, .. } => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExitOutcome::Success)
    }
}

/// Implementation of one verb.
///
/// Handlers receive the fully validated invocation and know nothing about
/// how it was parsed.
pub trait VerbHandler: Send + Sync {
    fn handle(&self, invocation: &ParsedInvocation) -> ApplicationResult<ExitOutcome>;
}

/// Verb name to handler mapping.
#[derive(Default, Clone)]
pub struct HandlerTable {
    handlers: HashMap<&'static str, Arc<dyn VerbHandler>>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, verb: &'static str, handler: Arc<dyn VerbHandler>) {
        self.handlers.insert(verb, handler);
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.handlers.contains_key(verb)
    }

    /// Run the handler for the invocation's verb.
    ///
    /// Verbs without a handler end with [`exitcode::UNAVAILABLE`].
    pub fn handle(&self, invocation: &ParsedInvocation) -> ApplicationResult<ExitOutcome> {
        match self.handlers.get(invocation.verb) {
            Some(handler) => handler.handle(invocation),
            None => {
                debug!("handle: no handler for verb={}", invocation.verb);
                Ok(ExitOutcome::Failure {
                    code: exitcode::UNAVAILABLE,
                    message: format!("verb '{}' is not available in this build", invocation.verb),
                })
            }
        }
    }
}
