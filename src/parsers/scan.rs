use serde::Deserialize;

use crate::core::findings::Finding;

#[derive(Debug, Deserialize)]
struct ScanReport {
    #[serde(default)]
    findings: Vec<Finding>,
}

/// Parse a scan report into raw findings. JSON reports carry a `findings`
/// array; anything else is treated as line-oriented plain text. Zero findings
/// is a valid result, not an error.
pub fn parse_scan_report(text: &str) -> Vec<Finding> {
    if let Ok(report) = serde_json::from_str::<ScanReport>(text) {
        return report.findings;
    }
    parse_plain_text(text)
}

/// One finding per non-empty line. A `path.ext: message` prefix attributes
/// the finding to that file; bare lines fall back to the default file.
fn parse_plain_text(text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let finding = match line.split_once(':') {
            Some((path, message)) if looks_like_path(path) => Finding {
                file: Some(path.trim().to_string()),
                message: non_empty(message),
            },
            _ => Finding {
                file: None,
                message: Some(line.to_string()),
            },
        };
        findings.push(finding);
    }
    findings
}

fn looks_like_path(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.contains('.') && !s.contains(char::is_whitespace)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_json_findings_array() {
        let report = r#"{"findings": [
            {"file": "app.py", "message": "print needs parentheses"},
            {"message": "division by zero"}
        ]}"#;
        let findings = parse_scan_report(report);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].file.as_deref(), Some("app.py"));
        assert_eq!(findings[1].file, None);
        assert_eq!(findings[1].message.as_deref(), Some("division by zero"));
    }

    #[test]
    fn test_json_without_findings_key_is_empty() {
        assert!(parse_scan_report(r#"{"tool": "scanner"}"#).is_empty());
    }

    #[test]
    fn test_plain_text_with_path_prefix() {
        let findings = parse_scan_report("app.py: print missing parentheses\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file.as_deref(), Some("app.py"));
        assert_eq!(
            findings[0].message.as_deref(),
            Some("print missing parentheses")
        );
    }

    #[test]
    fn test_plain_text_bare_line_has_no_file() {
        let findings = parse_scan_report("possible division by zero\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file, None);
        assert_eq!(
            findings[0].message.as_deref(),
            Some("possible division by zero")
        );
    }

    #[test]
    fn test_plain_text_skips_blank_lines() {
        let findings = parse_scan_report("\napp.py: one\n\n\nutil.py: two\n");
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_colon_in_prose_is_not_a_path() {
        let findings = parse_scan_report("warning: something odd\n");
        assert_eq!(findings[0].file, None);
        assert_eq!(findings[0].message.as_deref(), Some("warning: something odd"));
    }

    #[test]
    fn test_empty_report_yields_no_findings() {
        assert!(parse_scan_report("").is_empty());
        assert!(parse_scan_report(r#"{"findings": []}"#).is_empty());
    }
}
