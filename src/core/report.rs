use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Modified,
    Added,
    Removed,
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeType::Modified => write!(f, "modified"),
            ChangeType::Added => write!(f, "added"),
            ChangeType::Removed => write!(f, "removed"),
        }
    }
}

/// One differing line between the original and fixed text.
///
/// Invariant: `Modified` has both sides non-empty and unequal, `Added` has an
/// empty original, `Removed` has an empty fixed side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChange {
    pub line_number: usize,
    pub original: String,
    pub fixed: String,
    pub change_type: ChangeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileStatus {
    /// The file was found in the checkout and ran through the rule set.
    Fixed,
    /// No file matched the reported path; a placeholder was fabricated at it.
    SynthesizedPlaceholder,
    /// No file matched and the skip policy left the checkout untouched.
    SkippedNotFound,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Fixed => write!(f, "fixed"),
            FileStatus::SynthesizedPlaceholder => write!(f, "synthesized-placeholder"),
            FileStatus::SkippedNotFound => write!(f, "skipped-not-found"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    /// Path as reported by the scan.
    pub file: String,
    /// Path the resolver settled on inside the checkout.
    pub full_path: PathBuf,
    pub status: FileStatus,
    /// Messages that triggered at least one fix rule.
    pub issues_fixed: Vec<String>,
    /// Messages no rule knows how to handle.
    pub issues_unaddressed: Vec<String>,
    pub line_changes: Vec<LineChange>,
    pub total_lines_changed: usize,
    pub fix_explanation: String,
    pub optimizations: Vec<String>,
    pub diff: String,
}

/// Top-level artifact of one review: every touched file plus summary counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeReport {
    pub files: Vec<FileChange>,
    pub total_issues: usize,
    pub issues_addressed: usize,
    pub issues_unaddressed: usize,
    pub files_changed: usize,
    pub total_lines_changed: usize,
}

impl ChangeReport {
    pub fn push(&mut self, change: FileChange) {
        self.total_issues += change.issues_fixed.len() + change.issues_unaddressed.len();
        self.issues_addressed += change.issues_fixed.len();
        self.issues_unaddressed += change.issues_unaddressed.len();
        if !change.line_changes.is_empty() {
            self.files_changed += 1;
        }
        self.total_lines_changed += change.total_lines_changed;
        self.files.push(change);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_change(fixed: usize, unaddressed: usize, lines: usize) -> FileChange {
        FileChange {
            file: "app.py".to_string(),
            full_path: PathBuf::from("/tmp/repo/app.py"),
            status: FileStatus::Fixed,
            issues_fixed: (0..fixed).map(|i| format!("issue {}", i)).collect(),
            issues_unaddressed: (0..unaddressed).map(|i| format!("other {}", i)).collect(),
            line_changes: (0..lines)
                .map(|i| LineChange {
                    line_number: i + 1,
                    original: "old".to_string(),
                    fixed: "new".to_string(),
                    change_type: ChangeType::Modified,
                })
                .collect(),
            total_lines_changed: lines,
            fix_explanation: "Code fixed".to_string(),
            optimizations: vec![],
            diff: String::new(),
        }
    }

    #[test]
    fn test_report_counters_accumulate() {
        let mut report = ChangeReport::default();
        report.push(make_change(2, 1, 3));
        report.push(make_change(1, 0, 0));

        assert_eq!(report.total_issues, 4);
        assert_eq!(report.issues_addressed, 3);
        assert_eq!(report.issues_unaddressed, 1);
        assert_eq!(report.files_changed, 1);
        assert_eq!(report.total_lines_changed, 3);
        assert_eq!(report.files.len(), 2);
    }

    #[test]
    fn test_empty_report() {
        let report = ChangeReport::default();
        assert!(report.is_empty());
        assert_eq!(report.total_issues, 0);
    }

    #[test]
    fn test_change_type_serializes_lowercase() {
        let change = LineChange {
            line_number: 1,
            original: "print \"hi\"".to_string(),
            fixed: "print(\"hi\")".to_string(),
            change_type: ChangeType::Modified,
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["change_type"], "modified");
        assert_eq!(json["line_number"], 1);
    }

    #[test]
    fn test_file_status_serializes_kebab_case() {
        let json = serde_json::to_value(FileStatus::SkippedNotFound).unwrap();
        assert_eq!(json, "skipped-not-found");
    }
}
