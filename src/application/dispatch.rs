//! Verb dispatcher
//!
//! Turns raw arguments into a validated [`ParsedInvocation`]. Tokens are first
//! scanned against the verb's schema so every unknown token is found in one pass
//! and a declared marker is never taken as another option's value. What remains
//! is tokenized by a `clap::Command` lowered from the schema; requiredness,
//! defaults and list splitting are resolved here so every violation is reported
//! at once.

use std::ffi::OsString;
use std::sync::Arc;

use clap::error::{ContextKind, ErrorKind};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, instrument};

use crate::application::registry::{RESERVED_LONG, RESERVED_SHORT};
use crate::application::{ApplicationError, ApplicationResult, VerbRegistry};
use crate::domain::{
    split_escaped, ParameterKind, ParameterSpec, ParameterValue, ParsedInvocation, VerbSchema,
};

/// Build the tokenizer command for one verb.
///
/// All options are declared optional here; missing required options are
/// collected by the dispatcher instead of failing on the first one.
pub fn command_for(schema: &VerbSchema) -> Command {
    let mut cmd = Command::new(schema.name)
        .about(schema.description)
        .no_binary_name(true)
        .disable_version_flag(true);

    for spec in &schema.parameters {
        let mut arg = Arg::new(spec.long).long(spec.long).help(spec.help);
        if let Some(short) = spec.short {
            arg = arg.short(short);
        }
        arg = match spec.kind {
            ParameterKind::Flag => arg.action(ArgAction::SetTrue),
            ParameterKind::Text | ParameterKind::List => arg
                .action(ArgAction::Set)
                .value_parser(value_parser!(String))
                .allow_hyphen_values(true)
                .value_name(spec.value_name().unwrap_or("VALUE")),
        };
        cmd = cmd.arg(arg);
    }
    cmd
}

/// Matches argument lists against the registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<VerbRegistry>,
    delimiter: char,
}

impl Dispatcher {
    pub fn new(registry: Arc<VerbRegistry>, delimiter: char) -> Self {
        Self {
            registry,
            delimiter,
        }
    }

    pub fn registry(&self) -> &VerbRegistry {
        &self.registry
    }

    /// Dispatch an argument list (program name excluded).
    ///
    /// The first token selects the verb; the rest is parsed against its schema.
    #[instrument(level = "debug", skip_all)]
    pub fn dispatch<I, T>(&self, args: I) -> ApplicationResult<ParsedInvocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Err(ApplicationError::NoVerbSelected {
                available: self.registry.verb_names(),
            });
        }

        let first = args.remove(0);
        let token = first.to_string_lossy();
        match &*token {
            "help" | "--help" | "-h" => {
                let verb = args
                    .first()
                    .and_then(|a| a.to_str())
                    .and_then(|name| self.registry.lookup(name).ok())
                    .map(|schema| schema.name);
                return Err(ApplicationError::HelpRequested { verb });
            }
            "version" | "--version" => return Err(ApplicationError::VersionRequested),
            _ => {}
        }

        let schema = self.registry.lookup(&token)?;
        debug!("dispatch: verb={} tokens={}", schema.name, args.len());

        let Scan { kept, unknown } = scan(schema, args)?;
        let matches = match command_for(schema).try_get_matches_from(kept) {
            Ok(matches) => matches,
            Err(e) if unknown.is_empty() => return Err(map_error(schema.name, e)),
            Err(_) => {
                return Err(ApplicationError::UnknownOption {
                    verb: schema.name,
                    tokens: unknown,
                    missing: Vec::new(),
                })
            }
        };

        let (invocation, missing) = self.resolve(schema, &matches);
        if !unknown.is_empty() {
            return Err(ApplicationError::UnknownOption {
                verb: schema.name,
                tokens: unknown,
                missing,
            });
        }
        if !missing.is_empty() {
            return Err(ApplicationError::MissingRequiredParameters {
                verb: schema.name,
                names: missing,
            });
        }

        debug!("dispatch: verb={} values={:?}", schema.name, invocation.values);
        Ok(invocation)
    }

    /// Convert matches into an invocation with defaults applied.
    ///
    /// Returns the required options that were neither supplied nor defaulted.
    fn resolve(
        &self,
        schema: &VerbSchema,
        matches: &ArgMatches,
    ) -> (ParsedInvocation, Vec<&'static str>) {
        let mut invocation = ParsedInvocation::new(schema.name);
        let mut missing = Vec::new();

        for spec in &schema.parameters {
            let supplied = match spec.kind {
                ParameterKind::Flag => matches
                    .get_flag(spec.long)
                    .then_some(ParameterValue::Flag(true)),
                ParameterKind::Text => matches
                    .get_one::<String>(spec.long)
                    .map(|v| ParameterValue::Text(v.clone())),
                ParameterKind::List => matches
                    .get_one::<String>(spec.long)
                    .map(|v| ParameterValue::List(split_escaped(v, self.delimiter))),
            };

            match supplied.or_else(|| spec.default.clone()) {
                Some(value) => invocation.insert(spec.long, value),
                None if spec.required => missing.push(spec.long),
                None => {}
            }
        }
        (invocation, missing)
    }
}

/// Arguments split into those handed to the tokenizer and those no option claims.
#[derive(Debug, Default)]
struct Scan {
    kept: Vec<OsString>,
    unknown: Vec<String>,
}

/// What a token in option position refers to.
enum Marker<'s> {
    /// Declared option; `inline` when the value is attached (`--in=x`, `-ix`).
    Declared {
        spec: &'s ParameterSpec,
        inline: bool,
    },
    /// `--help` / `-h`, owned by the tokenizer
    Help,
    /// Dash-prefixed but not declared
    Unknown,
    /// No option marker
    Bare,
}

impl Marker<'_> {
    fn is_option(&self) -> bool {
        matches!(self, Marker::Declared { .. } | Marker::Help)
    }
}

fn classify<'s>(schema: &'s VerbSchema, token: &str) -> Marker<'s> {
    if let Some(rest) = token.strip_prefix("--") {
        let (name, inline) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };
        if name == RESERVED_LONG {
            return Marker::Help;
        }
        return match schema.parameter(name) {
            Some(spec) => Marker::Declared { spec, inline },
            None => Marker::Unknown,
        };
    }

    let Some(rest) = token.strip_prefix('-') else {
        return Marker::Bare;
    };
    let mut chars = rest.chars();
    match chars.next() {
        None => Marker::Bare,
        Some(RESERVED_SHORT) => Marker::Help,
        Some(alias) => match schema.parameters.iter().find(|p| p.short == Some(alias)) {
            Some(spec) => Marker::Declared {
                spec,
                inline: !chars.as_str().is_empty(),
            },
            None => Marker::Unknown,
        },
    }
}

/// Walk the arguments left to right, pairing value options with their values.
///
/// Tokens in option position that no declared option claims are collected as
/// unknown. A value option followed by nothing, or by another declared marker,
/// is a value error.
fn scan(schema: &VerbSchema, args: Vec<OsString>) -> ApplicationResult<Scan> {
    let mut result = Scan::default();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        let Some(token) = arg.to_str() else {
            result.unknown.push(arg.to_string_lossy().into_owned());
            continue;
        };

        match classify(schema, token) {
            Marker::Declared {
                spec,
                inline: false,
            } if spec.kind != ParameterKind::Flag => {
                let has_value = args.peek().is_some_and(|next| {
                    next.to_str()
                        .map_or(true, |value| !classify(schema, value).is_option())
                });
                if !has_value {
                    return Err(ApplicationError::ValueFormat {
                        verb: schema.name,
                        token: token.to_string(),
                        message: "a value is required".to_string(),
                    });
                }
                result.kept.push(arg);
                result.kept.extend(args.next());
            }
            Marker::Declared { .. } | Marker::Help => result.kept.push(arg),
            Marker::Unknown | Marker::Bare => result.unknown.push(token.to_string()),
        }
    }

    if !result.unknown.is_empty() {
        debug!("scan: unknown tokens {:?}", result.unknown);
    }
    Ok(result)
}

fn invalid_arg(err: &clap::Error) -> String {
    err.get(ContextKind::InvalidArg)
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn map_error(verb: &'static str, err: clap::Error) -> ApplicationError {
    match err.kind() {
        ErrorKind::DisplayHelp => ApplicationError::HelpRequested { verb: Some(verb) },
        ErrorKind::DisplayVersion => ApplicationError::VersionRequested,
        ErrorKind::UnknownArgument => ApplicationError::UnknownOption {
            verb,
            tokens: vec![invalid_arg(&err)],
            missing: Vec::new(),
        },
        kind => {
            let message = match kind {
                ErrorKind::InvalidValue => "a value is required",
                ErrorKind::TooManyValues => "flag options take no value",
                ErrorKind::ArgumentConflict => "option given more than once",
                ErrorKind::InvalidUtf8 => "value is not valid UTF-8",
                _ => "invalid value",
            };
            ApplicationError::ValueFormat {
                verb,
                token: invalid_arg(&err),
                message: message.to_string(),
            }
        }
    }
}
