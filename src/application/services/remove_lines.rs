//! Pattern-based line removal
//!
//! Backs the `removeLines` verb. Input is streamed line by line.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, info, instrument};

use super::required_text;
use crate::application::verbs::REMOVE_LINES;
use crate::application::{
    ApplicationError, ApplicationResult, ExitOutcome, IoResultExt, VerbHandler,
};
use crate::domain::ParsedInvocation;
use crate::infrastructure::traits::FileService;

/// Resolved options of `removeLines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveLinesOptions {
    pub patterns: Vec<String>,
    /// Remove only lines matching every pattern
    pub conjunctive: bool,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl RemoveLinesOptions {
    pub fn from_invocation(invocation: &ParsedInvocation) -> ApplicationResult<Self> {
        Ok(Self {
            patterns: invocation.list("patterns").to_vec(),
            conjunctive: invocation.flag("conjunctive"),
            input: PathBuf::from(required_text(invocation, "in")?),
            output: invocation.text("out").map(PathBuf::from),
        })
    }

    pub fn target(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalReport {
    pub removed: usize,
    pub kept: usize,
    pub target: PathBuf,
    /// False when nothing matched and the input would have been overwritten
    pub written: bool,
}

/// Service removing lines that match regex patterns.
pub struct LineRemovalService {
    fs: Arc<dyn FileService>,
}

impl LineRemovalService {
    pub fn new(fs: Arc<dyn FileService>) -> Self {
        Self { fs }
    }

    /// Compile non-empty patterns; empty entries are skipped.
    fn compile(patterns: &[String]) -> ApplicationResult<Vec<Regex>> {
        let compiled = patterns
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| {
                Regex::new(p).map_err(|source| ApplicationError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        if compiled.is_empty() {
            return Err(ApplicationError::InvalidArgument {
                verb: REMOVE_LINES,
                name: "patterns",
                message: "at least one non-empty pattern is required".to_string(),
            });
        }
        Ok(compiled)
    }

    fn is_removed(patterns: &[Regex], line: &str, conjunctive: bool) -> bool {
        if conjunctive {
            patterns.iter().all(|re| re.is_match(line))
        } else {
            patterns.iter().any(|re| re.is_match(line))
        }
    }

    /// Filter the input and write the kept lines.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&self, options: &RemoveLinesOptions) -> ApplicationResult<RemovalReport> {
        let patterns = Self::compile(&options.patterns)?;
        debug!(
            "remove: {} pattern(s), conjunctive={}",
            patterns.len(),
            options.conjunctive
        );

        let mut kept = Vec::new();
        let mut removed = 0;
        for line in self
            .fs
            .read_lines_lazily(&options.input)
            .with_path_context("read", &options.input)?
        {
            let line = line.with_path_context("read", &options.input)?;
            if Self::is_removed(&patterns, &line, options.conjunctive) {
                removed += 1;
            } else {
                kept.push(line);
            }
        }

        let target = options.target().to_path_buf();
        let written = removed > 0 || options.output.is_some();
        if written {
            self.fs
                .write_all_lines(&target, &kept)
                .with_path_context("write", &target)?;
        } else {
            debug!("remove: no line matched, {} left untouched", target.display());
        }

        Ok(RemovalReport {
            removed,
            kept: kept.len(),
            target,
            written,
        })
    }
}

impl VerbHandler for LineRemovalService {
    fn handle(&self, invocation: &ParsedInvocation) -> ApplicationResult<ExitOutcome> {
        let options = RemoveLinesOptions::from_invocation(invocation)?;
        let report = self.remove(&options)?;
        info!(
            "removed {} line(s), kept {}, result in {}",
            report.removed,
            report.kept,
            report.target.display()
        );
        Ok(ExitOutcome::Success)
    }
}
