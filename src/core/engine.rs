use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::findings::{Finding, IssueMap};
use crate::core::report::{ChangeReport, FileChange, FileStatus};
use crate::core::resolve::{self, Resolution, PLACEHOLDER_SNIPPET};
use crate::diff;
use crate::rules::registry::RuleRegistry;

/// What to do when a reported path matches nothing in the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFilePolicy {
    /// Fabricate a placeholder at the nominal path and fix that. Demo
    /// behavior: it guarantees a bad path in the report never silently drops
    /// an issue.
    #[default]
    Synthesize,
    /// Record the file as skipped-not-found and leave the checkout untouched.
    Skip,
}

/// Orchestrates resolver, rules and diffing per affected file, sequentially
/// in finding order. Filesystem failure anywhere aborts the whole run.
pub struct FixEngine {
    rules: RuleRegistry,
    missing: MissingFilePolicy,
    write: bool,
}

impl FixEngine {
    pub fn new(rules: RuleRegistry) -> Self {
        Self {
            rules,
            missing: MissingFilePolicy::default(),
            write: true,
        }
    }

    pub fn with_missing_policy(mut self, policy: MissingFilePolicy) -> Self {
        self.missing = policy;
        self
    }

    /// Compute diffs without persisting anything, placeholders included.
    pub fn dry_run(mut self) -> Self {
        self.write = false;
        self
    }

    pub fn process(&self, root: &Path, findings: &[Finding]) -> Result<ChangeReport> {
        let issues = IssueMap::from_findings(findings);
        if issues.is_empty() {
            return Ok(ChangeReport::default());
        }
        log::debug!(
            "routing {} issue(s) across {} file(s)",
            issues.total_issues(),
            issues.len()
        );
        let mut report = ChangeReport::default();

        for (file, messages) in issues.iter() {
            log::debug!("processing {} ({} issue(s))", file, messages.len());
            let change = self.process_file(root, file, messages)?;
            report.push(change);
        }

        Ok(report)
    }

    fn process_file(&self, root: &Path, file: &str, messages: &[String]) -> Result<FileChange> {
        let (full_path, status, original) = match resolve::resolve(root, file) {
            Resolution::Direct(path) | Resolution::Basename(path) => {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                (path, FileStatus::Fixed, text)
            }
            Resolution::Missing(path) => match self.missing {
                MissingFilePolicy::Synthesize => {
                    if self.write {
                        resolve::synthesize_placeholder(&path)?;
                    }
                    (
                        path,
                        FileStatus::SynthesizedPlaceholder,
                        PLACEHOLDER_SNIPPET.to_string(),
                    )
                }
                MissingFilePolicy::Skip => {
                    return Ok(Self::skipped(file, path, messages));
                }
            },
        };

        let outcome = self.rules.apply(&original, messages);
        if self.write {
            fs::write(&full_path, &outcome.fixed)
                .with_context(|| format!("writing {}", full_path.display()))?;
        }

        let line_changes = diff::line_changes(&original, &outcome.fixed);
        let rendered = diff::render(&line_changes);

        Ok(FileChange {
            file: file.to_string(),
            full_path,
            status,
            fix_explanation: outcome.explanation(),
            issues_fixed: outcome.issues_fixed,
            issues_unaddressed: outcome.issues_unaddressed,
            total_lines_changed: line_changes.len(),
            line_changes,
            optimizations: vec![],
            diff: rendered,
        })
    }

    fn skipped(file: &str, path: PathBuf, messages: &[String]) -> FileChange {
        FileChange {
            file: file.to_string(),
            full_path: path,
            status: FileStatus::SkippedNotFound,
            issues_fixed: vec![],
            issues_unaddressed: messages.to_vec(),
            line_changes: vec![],
            total_lines_changed: 0,
            fix_explanation: "File not found in checkout".to_string(),
            optimizations: vec![],
            diff: diff::NO_CHANGES.to_string(),
        }
    }
}
