use crate::core::report::{ChangeType, LineChange};

/// Marker rendered when two texts are line-for-line identical.
pub const NO_CHANGES: &str = "No changes made";

/// Positional line diff: both texts are walked by index up to the longer
/// length, a missing index reading as the empty string. Lines equal at the
/// same index are never emitted.
pub fn line_changes(original: &str, fixed: &str) -> Vec<LineChange> {
    let original_lines: Vec<&str> = original.lines().collect();
    let fixed_lines: Vec<&str> = fixed.lines().collect();

    let mut changes = Vec::new();
    for i in 0..original_lines.len().max(fixed_lines.len()) {
        let orig = original_lines.get(i).copied().unwrap_or("");
        let fix = fixed_lines.get(i).copied().unwrap_or("");
        if orig == fix {
            continue;
        }
        let change_type = if !orig.is_empty() && !fix.is_empty() {
            ChangeType::Modified
        } else if fix.is_empty() {
            ChangeType::Removed
        } else {
            ChangeType::Added
        };
        changes.push(LineChange {
            line_number: i + 1,
            original: orig.to_string(),
            fixed: fix.to_string(),
            change_type,
        });
    }
    changes
}

/// Render a change list as a minimal unified-style diff. Stable for identical
/// inputs; no timestamps or hunk headers.
pub fn render(changes: &[LineChange]) -> String {
    if changes.is_empty() {
        return NO_CHANGES.to_string();
    }

    let mut lines = Vec::new();
    for change in changes {
        match change.change_type {
            ChangeType::Modified => {
                lines.push(format!("- {}", change.original));
                lines.push(format!("+ {}", change.fixed));
            }
            ChangeType::Removed => lines.push(format!("- {}", change.original)),
            ChangeType::Added => lines.push(format!("+ {}", change.fixed)),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_yield_no_changes() {
        let text = "a\nb\nc\n";
        let changes = line_changes(text, text);
        assert!(changes.is_empty());
        assert_eq!(render(&changes), NO_CHANGES);
    }

    #[test]
    fn test_modified_line() {
        let changes = line_changes("print \"hi\"\n", "print(\"hi\")\n");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].line_number, 1);
        assert_eq!(changes[0].change_type, ChangeType::Modified);
        assert_eq!(changes[0].original, "print \"hi\"");
        assert_eq!(changes[0].fixed, "print(\"hi\")");
        assert_eq!(render(&changes), "- print \"hi\"\n+ print(\"hi\")");
    }

    #[test]
    fn test_added_lines_past_original_end() {
        let changes = line_changes("a\n", "a\nb\nc\n");
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.change_type == ChangeType::Added));
        assert_eq!(changes[0].line_number, 2);
        assert_eq!(changes[1].line_number, 3);
        assert_eq!(render(&changes), "+ b\n+ c");
    }

    #[test]
    fn test_removed_lines_past_fixed_end() {
        let changes = line_changes("a\nb\n", "a\n");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Removed);
        assert_eq!(render(&changes), "- b");
    }

    #[test]
    fn test_no_phantom_line_from_trailing_newline() {
        // "a\n" and "a" hold the same single line.
        assert!(line_changes("a\n", "a").is_empty());
    }

    #[test]
    fn test_insertion_marks_following_lines() {
        // Positional walk: an inserted line shifts everything after it.
        let changes = line_changes("x\ny\n", "guard\nx\ny\n");
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].change_type, ChangeType::Modified);
        assert_eq!(changes[2].change_type, ChangeType::Added);
    }

    #[test]
    fn test_reconstruction_from_changes() {
        let original = "def f(a, b):\n    return a / b\n";
        let fixed = "def f(a, b):\n    if b == 0: raise ValueError(\"Division by zero\")\n    return a / b\n";
        let changes = line_changes(original, fixed);

        // Replaying the changes over the original must rebuild the fixed text.
        let original_lines: Vec<&str> = original.lines().collect();
        let fixed_len = fixed.lines().count();
        let mut rebuilt = Vec::new();
        for i in 0..fixed_len {
            match changes.iter().find(|c| c.line_number == i + 1) {
                Some(change) => rebuilt.push(change.fixed.clone()),
                None => rebuilt.push(original_lines[i].to_string()),
            }
        }
        assert_eq!(rebuilt, fixed.lines().collect::<Vec<_>>());
    }

    #[test]
    fn test_render_is_stable() {
        let changes = line_changes("a\nb\n", "a\nc\n");
        assert_eq!(render(&changes), render(&changes));
    }
}
