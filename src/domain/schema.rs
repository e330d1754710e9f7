//! Declarative verb and parameter schemas
//!
//! Schemas are plain data. The registry validates them once at startup and
//! the dispatcher interprets them; nothing here parses user input.

/// Value kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Single text value (`-f foo`, `--find=foo`)
    Text,
    /// Presence toggles the value to true; consumes no value token
    Flag,
    /// Delimited list in a single token (`-p "a#b\#c"`)
    List,
}

/// A parsed parameter value, kept as its declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl ParameterValue {
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterValue::Text(_) => ParameterKind::Text,
            ParameterValue::Flag(_) => ParameterKind::Flag,
            ParameterValue::List(_) => ParameterKind::List,
        }
    }
}

/// Declaration of one option a verb accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Long name, unique within the effective parameter set
    pub long: &'static str,
    /// Optional single-character alias
    pub short: Option<char>,
    pub kind: ParameterKind,
    pub required: bool,
    pub default: Option<ParameterValue>,
    pub help: &'static str,
}

impl ParameterSpec {
    fn new(long: &'static str, kind: ParameterKind) -> Self {
        Self {
            long,
            short: None,
            kind,
            required: false,
            default: None,
            help: "",
        }
    }

    /// Single-valued text option.
    pub fn text(long: &'static str) -> Self {
        Self::new(long, ParameterKind::Text)
    }

    /// Boolean flag, false unless present.
    pub fn flag(long: &'static str) -> Self {
        Self::new(long, ParameterKind::Flag).default_value(ParameterValue::Flag(false))
    }

    /// Delimited list option.
    pub fn list(long: &'static str) -> Self {
        Self::new(long, ParameterKind::List)
    }

    pub fn short(mut self, alias: char) -> Self {
        self.short = Some(alias);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: ParameterValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn help(mut self, help: &'static str) -> Self {
        self.help = help;
        self
    }

    /// Placeholder shown in usage output.
    pub fn value_name(&self) -> Option<&'static str> {
        match self.kind {
            ParameterKind::Text => Some("VALUE"),
            ParameterKind::List => Some("A#B#.."),
            ParameterKind::Flag => None,
        }
    }

    /// `-f, --find` style label.
    pub fn label(&self) -> String {
        match self.short {
            Some(c) => format!("-{}, --{}", c, self.long),
            None => format!("    --{}", self.long),
        }
    }
}

/// Named subcommand with its ordered parameter list.
///
/// Before registration `parameters` holds only the verb's own declarations.
/// The registry stores the effective set (shared options first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: Vec<&'static str>,
    pub parameters: Vec<ParameterSpec>,
}

impl VerbSchema {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            examples: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn param(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    pub fn example(mut self, example: &'static str) -> Self {
        self.examples.push(example);
        self
    }

    /// Find a parameter by long name.
    pub fn parameter(&self, long: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.long == long)
    }

    /// Required parameters in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.required)
    }
}
