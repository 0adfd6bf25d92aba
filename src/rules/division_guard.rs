use super::traits::FixRule;

/// Inserts a zero-divisor guard before the first `return` that divides.
/// Only that first qualifying line is patched per application, and a line
/// already preceded by its guard is left alone, so repeated applications
/// insert exactly one guard.
pub struct DivisionGuardRule;

impl DivisionGuardRule {
    /// Identifier following the division operator, e.g. `b` in `return a / b`.
    fn divisor(line: &str) -> Option<String> {
        let after = line.split_once('/')?.1.trim_start();
        let ident: String = after
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
            None
        } else {
            Some(ident)
        }
    }
}

impl FixRule for DivisionGuardRule {
    fn name(&self) -> &'static str {
        "division-guard"
    }

    fn describe(&self) -> &'static str {
        "Inserted a zero-divisor guard before a dividing return"
    }

    fn matches(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        message.contains("division") || message.contains("zero")
    }

    fn apply(&self, text: &str) -> String {
        // split/join on '\n' keeps the trailing newline intact
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

        for i in 0..lines.len() {
            let line = &lines[i];
            if !line.contains('/') || !line.contains("return") {
                continue;
            }
            let indent = &line[..line.len() - line.trim_start().len()];
            let divisor = Self::divisor(line).unwrap_or_else(|| "b".to_string());
            let guard = format!(
                "{}if {} == 0: raise ValueError(\"Division by zero\")",
                indent, divisor
            );
            if i > 0 && lines[i - 1] == guard {
                return text.to_string();
            }
            lines.insert(i, guard);
            break;
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_either_keyword() {
        let rule = DivisionGuardRule;
        assert!(rule.matches("possible division by zero"));
        assert!(rule.matches("ZeroDivisionError risk"));
        assert!(!rule.matches("unused variable"));
    }

    #[test]
    fn test_inserts_guard_with_matching_indent() {
        let rule = DivisionGuardRule;
        let fixed = rule.apply("def f(a, b):\n    return a / b\n");
        assert_eq!(
            fixed,
            "def f(a, b):\n    if b == 0: raise ValueError(\"Division by zero\")\n    return a / b\n"
        );
    }

    #[test]
    fn test_guard_names_the_divisor() {
        let rule = DivisionGuardRule;
        let fixed = rule.apply("def avg(total, count):\n    return total / count\n");
        assert!(fixed.contains("if count == 0: raise ValueError(\"Division by zero\")"));
    }

    #[test]
    fn test_only_first_qualifying_line_is_patched() {
        let rule = DivisionGuardRule;
        let fixed = rule.apply("return a / b\nreturn c / d\n");
        assert_eq!(fixed.matches("raise ValueError").count(), 1);
        assert!(fixed.starts_with("if b == 0:"));
    }

    #[test]
    fn test_second_application_inserts_no_second_guard() {
        let rule = DivisionGuardRule;
        let once = rule.apply("def f(a, b):\n    return a / b\n");
        let twice = rule.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("raise ValueError").count(), 1);
    }

    #[test]
    fn test_no_dividing_return_is_a_noop() {
        let rule = DivisionGuardRule;
        let text = "def f(a, b):\n    return a + b\n";
        assert_eq!(rule.apply(text), text);
    }
}
