//! The validated result of matching user input against a verb schema

use std::collections::BTreeMap;

use crate::domain::schema::ParameterValue;

/// Long name of the shared verbose flag.
pub const VERBOSE: &str = "verbose";
/// Long name of the shared debug logging flag.
pub const DEBUG_LOG: &str = "debugLog";

/// Matched verb plus its parsed parameter values (defaults applied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub verb: &'static str,
    pub values: BTreeMap<&'static str, ParameterValue>,
}

impl ParsedInvocation {
    pub fn new(verb: &'static str) -> Self {
        Self {
            verb,
            values: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, long: &'static str, value: ParameterValue) {
        self.values.insert(long, value);
    }

    pub fn get(&self, long: &str) -> Option<&ParameterValue> {
        self.values.get(long)
    }

    pub fn text(&self, long: &str) -> Option<&str> {
        match self.values.get(long) {
            Some(ParameterValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Flag value; absent flags read as false.
    pub fn flag(&self, long: &str) -> bool {
        matches!(self.values.get(long), Some(ParameterValue::Flag(true)))
    }

    /// List value; absent lists read as empty.
    pub fn list(&self, long: &str) -> &[String] {
        match self.values.get(long) {
            Some(ParameterValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn verbose(&self) -> bool {
        self.flag(VERBOSE)
    }

    pub fn debug_log(&self) -> bool {
        self.flag(DEBUG_LOG)
    }
}
