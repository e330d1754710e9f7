//! Option schema registry
//!
//! Holds every verb schema, each merged with the shared options at
//! registration time. Read-only once built.

use std::collections::HashSet;

use tracing::debug;

use crate::application::{verbs, ApplicationError, ApplicationResult};
use crate::domain::{
    ConflictKind, DomainError, DomainResult, ParameterKind, ParameterSpec, VerbSchema, DEBUG_LOG,
    VERBOSE,
};

/// Long name the parser reserves for help output.
pub const RESERVED_LONG: &str = "help";
/// Short alias the parser reserves for help output.
pub const RESERVED_SHORT: char = 'h';

/// Cross-cutting flags composed into every verb.
pub fn base_options() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::flag(VERBOSE).help("Print progress and result details"),
        ParameterSpec::flag(DEBUG_LOG).help("Write debug log output to stderr"),
    ]
}

/// Registry of verb schemas, keyed by verb name.
#[derive(Debug, Clone)]
pub struct VerbRegistry {
    base: Vec<ParameterSpec>,
    verbs: Vec<VerbSchema>,
}

impl Default for VerbRegistry {
    fn default() -> Self {
        Self::new(base_options())
    }
}

impl VerbRegistry {
    /// Empty registry with the given shared options.
    pub fn new(base: Vec<ParameterSpec>) -> Self {
        Self {
            base,
            verbs: Vec::new(),
        }
    }

    /// Registry populated with all built-in verbs.
    pub fn builtin() -> DomainResult<Self> {
        let mut registry = Self::default();
        for schema in verbs::builtin_verbs() {
            registry.register(schema)?;
        }
        debug!("builtin registry: {} verbs", registry.verbs.len());
        Ok(registry)
    }

    /// Validate and store a schema under its verb name.
    ///
    /// The stored schema carries the effective parameter set: shared options
    /// first, then the verb's own declarations.
    pub fn register(&mut self, schema: VerbSchema) -> DomainResult<()> {
        if self.verbs.iter().any(|v| v.name == schema.name) {
            return Err(DomainError::DuplicateVerb(schema.name.to_string()));
        }

        let mut parameters = self.base.clone();
        parameters.extend(schema.parameters);
        let schema = VerbSchema {
            parameters,
            ..schema
        };
        validate(&schema)?;

        debug!(
            "register: verb={} parameters={}",
            schema.name,
            schema.parameters.len()
        );
        self.verbs.push(schema);
        Ok(())
    }

    /// Look up a verb by exact name.
    pub fn lookup(&self, name: &str) -> ApplicationResult<&VerbSchema> {
        self.verbs
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| ApplicationError::UnknownVerb {
                verb: name.to_string(),
                available: self.verb_names(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.verbs.iter().any(|v| v.name == name)
    }

    /// Registered schemas in registration order.
    pub fn verbs(&self) -> impl Iterator<Item = &VerbSchema> {
        self.verbs.iter()
    }

    pub fn verb_names(&self) -> Vec<&'static str> {
        self.verbs.iter().map(|v| v.name).collect()
    }

    pub fn base_options(&self) -> &[ParameterSpec] {
        &self.base
    }
}

fn validate(schema: &VerbSchema) -> DomainResult<()> {
    let conflict = |kind, name: String| DomainError::SchemaConflict {
        verb: schema.name.to_string(),
        kind,
        name,
    };
    let invalid = |spec: &ParameterSpec, reason: &str| DomainError::InvalidParameter {
        verb: schema.name.to_string(),
        name: spec.long.to_string(),
        reason: reason.to_string(),
    };

    let mut longs = HashSet::new();
    let mut shorts = HashSet::new();

    for spec in &schema.parameters {
        if spec.long == RESERVED_LONG {
            return Err(conflict(ConflictKind::Reserved, spec.long.to_string()));
        }
        if spec.short == Some(RESERVED_SHORT) {
            return Err(conflict(ConflictKind::Reserved, RESERVED_SHORT.to_string()));
        }
        if !longs.insert(spec.long) {
            return Err(conflict(ConflictKind::LongName, spec.long.to_string()));
        }
        if let Some(short) = spec.short {
            if !shorts.insert(short) {
                return Err(conflict(ConflictKind::ShortAlias, short.to_string()));
            }
        }

        if spec.required && spec.kind == ParameterKind::Flag {
            return Err(invalid(spec, "flag parameters cannot be required"));
        }
        if spec.required && spec.default.is_some() {
            return Err(invalid(spec, "required parameter declares a default"));
        }
        if let Some(default) = &spec.default {
            if default.kind() != spec.kind {
                return Err(invalid(spec, "default value does not match parameter kind"));
            }
        }
    }
    Ok(())
}
