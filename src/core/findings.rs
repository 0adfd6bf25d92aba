use serde::{Deserialize, Serialize};

/// File a finding is attributed to when the report names none.
pub const DEFAULT_FILE: &str = "main.py";
/// Message substituted when a finding carries none.
pub const DEFAULT_MESSAGE: &str = "Code issue";

/// One raw finding as parsed from a scan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub file: Option<String>,
    pub message: Option<String>,
}

/// File path -> issue messages, preserving first-seen file order and per-file
/// message order. Duplicate messages are kept; keys need not name real files.
#[derive(Debug, Clone, Default)]
pub struct IssueMap {
    entries: Vec<(String, Vec<String>)>,
}

impl IssueMap {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut map = IssueMap::default();
        for finding in findings {
            let file = finding
                .file
                .clone()
                .unwrap_or_else(|| DEFAULT_FILE.to_string());
            let message = finding
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
            map.push(file, message);
        }
        map
    }

    fn push(&mut self, file: String, message: String) {
        match self.entries.iter_mut().find(|(f, _)| *f == file) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((file, vec![message])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(file, messages)| (file.as_str(), messages.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn total_issues(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }
}
