use regex::Regex;

use super::traits::FixRule;

/// Rewrites legacy print statements (`print "x"` / `print 'x'`) to call
/// syntax. The substitution is global and non-overlapping across the whole
/// file; already-converted calls contain no whitespace between `print` and
/// the quote, so they never re-match.
pub struct PrintCallRule {
    rewrites: Vec<(Regex, &'static str)>,
}

impl PrintCallRule {
    pub fn new() -> Self {
        let rewrites = [
            (r#"print\s+"([^"]*)""#, r#"print("$1")"#),
            (r"print\s+'([^']*)'", r"print('$1')"),
        ]
        .iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, *replacement))
        })
        .collect();
        Self { rewrites }
    }
}

impl Default for PrintCallRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FixRule for PrintCallRule {
    fn name(&self) -> &'static str {
        "print-call"
    }

    fn describe(&self) -> &'static str {
        "Rewrote print statements to call syntax"
    }

    fn matches(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        message.contains("print") && message.contains("parentheses")
    }

    fn apply(&self, text: &str) -> String {
        let mut fixed = text.to_string();
        for (re, replacement) in &self.rewrites {
            fixed = re.replace_all(&fixed, *replacement).into_owned();
        }
        fixed
    }
}
