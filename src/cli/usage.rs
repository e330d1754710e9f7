//! Usage listings rendered from the verb registry

use itertools::Itertools;

use crate::application::VerbRegistry;
use crate::cli::output;
use crate::config::{self, Settings};
use crate::domain::{ParameterSpec, ParameterValue, VerbSchema};

const BIN: &str = env!("CARGO_PKG_NAME");
const NAME_WIDTH: usize = 24;

/// Listing of every registered verb.
pub fn overview(registry: &VerbRegistry) -> String {
    let verbs = registry
        .verbs()
        .map(|schema| {
            format!(
                "  {}{}",
                output::name(&format!("{:<NAME_WIDTH$}", schema.name)),
                schema.description
            )
        })
        .join("\n");
    let shared = registry
        .base_options()
        .iter()
        .map(|p| format!("--{}", p.long))
        .join(", ");

    format!(
        "{BIN} {version}\n{about}\n\n{usage} {BIN} <VERB> [OPTIONS]\n\n{header}\n{verbs}\n\n{shared_header} {shared}\nRun '{BIN} help <VERB>' for the options of a verb.",
        version = env!("CARGO_PKG_VERSION"),
        about = env!("CARGO_PKG_DESCRIPTION"),
        usage = output::header("Usage:"),
        header = output::header("Verbs:"),
        shared_header = output::header("Shared options:"),
    )
}

/// Parameter table of one verb.
pub fn verb_help(schema: &VerbSchema) -> String {
    let mut sections = vec![
        schema.description.to_string(),
        format!("{} {BIN} {} [OPTIONS]", output::header("Usage:"), schema.name),
        format!(
            "{}\n{}",
            output::header("Options:"),
            schema.parameters.iter().map(option_line).join("\n")
        ),
    ];
    if !schema.examples.is_empty() {
        sections.push(format!(
            "{}\n{}",
            output::header("Examples:"),
            schema
                .examples
                .iter()
                .map(|example| format!("  {BIN} {example}"))
                .join("\n")
        ));
    }
    sections.join("\n\n")
}

fn option_line(spec: &ParameterSpec) -> String {
    let label = match spec.value_name() {
        Some(value) => format!("{} <{}>", spec.label(), value),
        None => spec.label(),
    };
    let mut notes = Vec::new();
    if spec.required {
        notes.push("required".to_string());
    }
    match &spec.default {
        Some(ParameterValue::Text(v)) => notes.push(format!("default: {v}")),
        Some(ParameterValue::Flag(true)) => notes.push("default: true".to_string()),
        _ => {}
    }
    let notes = if notes.is_empty() {
        String::new()
    } else {
        format!(" [{}]", notes.join(", "))
    };
    format!(
        "  {}{}{}",
        output::name(&format!("{label:<NAME_WIDTH$}")),
        spec.help,
        notes
    )
}

/// Effective settings and where they are read from.
pub fn configuration(settings: &Settings) -> String {
    let source = config::global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<no config directory>".to_string());
    let body = settings
        .to_toml()
        .unwrap_or_else(|e| format!("# {e}"));
    format!(
        "{} {source}\n{}",
        output::header("Configuration:"),
        body.trim_end()
    )
}
