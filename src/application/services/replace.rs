//! In-file text replacement
//!
//! Backs the `inFileReplace` verb.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::required_text;
use crate::application::verbs::IN_FILE_REPLACE;
use crate::application::{
    ApplicationError, ApplicationResult, ExitOutcome, IoResultExt, VerbHandler,
};
use crate::config::LineEnding;
use crate::domain::ParsedInvocation;
use crate::infrastructure::traits::FileService;

/// Resolved options of `inFileReplace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFileReplaceOptions {
    pub find: String,
    pub replace_with: String,
    /// Token standing for a line break in `find` and `replace_with`
    pub parse_as_newline: Option<String>,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl InFileReplaceOptions {
    pub fn from_invocation(invocation: &ParsedInvocation) -> ApplicationResult<Self> {
        Ok(Self {
            find: required_text(invocation, "find")?,
            replace_with: required_text(invocation, "replaceWith")?,
            parse_as_newline: invocation.text("parseAsNewline").map(str::to_string),
            input: PathBuf::from(required_text(invocation, "in")?),
            output: invocation.text("out").map(PathBuf::from),
        })
    }

    /// File the result is written to.
    pub fn target(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Outcome of a replacement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceReport {
    pub replacements: usize,
    pub target: PathBuf,
    /// False when nothing changed and the input would have been overwritten
    pub written: bool,
}

/// Service replacing every occurrence of a text in a file.
pub struct TextReplaceService {
    fs: Arc<dyn FileService>,
    line_ending: LineEnding,
}

impl TextReplaceService {
    pub fn new(fs: Arc<dyn FileService>, line_ending: LineEnding) -> Self {
        Self { fs, line_ending }
    }

    /// Replace all occurrences and write the result.
    #[instrument(level = "debug", skip(self))]
    pub fn replace(&self, options: &InFileReplaceOptions) -> ApplicationResult<ReplaceReport> {
        if options.find.is_empty() {
            return Err(ApplicationError::InvalidArgument {
                verb: IN_FILE_REPLACE,
                name: "find",
                message: "text to find must not be empty".to_string(),
            });
        }

        let (find, replacement) = match options.parse_as_newline.as_deref() {
            Some(token) if !token.is_empty() => {
                let newline = self.line_ending.as_str();
                (
                    options.find.replace(token, newline),
                    options.replace_with.replace(token, newline),
                )
            }
            _ => (options.find.clone(), options.replace_with.clone()),
        };

        let content = self
            .fs
            .read_all_text(&options.input)
            .with_path_context("read", &options.input)?;

        let replacements = content.matches(find.as_str()).count();
        let target = options.target().to_path_buf();
        debug!("replace: {} match(es) in {}", replacements, options.input.display());

        let written = replacements > 0 || options.output.is_some();
        if written {
            let result = content.replace(find.as_str(), &replacement);
            self.fs
                .write_all_text(&target, &result)
                .with_path_context("write", &target)?;
        }

        Ok(ReplaceReport {
            replacements,
            target,
            written,
        })
    }
}

impl VerbHandler for TextReplaceService {
    fn handle(&self, invocation: &ParsedInvocation) -> ApplicationResult<ExitOutcome> {
        let options = InFileReplaceOptions::from_invocation(invocation)?;
        let report = self.replace(&options)?;
        info!(
            "replaced {} occurrence(s), result in {}",
            report.replacements,
            report.target.display()
        );
        Ok(ExitOutcome::Success)
    }
}
