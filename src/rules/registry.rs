use super::division_guard::DivisionGuardRule;
use super::print_call::PrintCallRule;
use super::traits::FixRule;

/// Result of folding one file's text through the rule set.
pub struct FixOutcome {
    pub fixed: String,
    /// Messages that triggered at least one rule, in finding order.
    pub issues_fixed: Vec<String>,
    /// Messages no rule matched; the text was left untouched for them.
    pub issues_unaddressed: Vec<String>,
    /// Descriptions of the rules that fired, first-fired order, deduplicated.
    pub explanations: Vec<&'static str>,
}

impl FixOutcome {
    pub fn explanation(&self) -> String {
        if self.explanations.is_empty() {
            "Code fixed".to_string()
        } else {
            self.explanations.join("; ")
        }
    }
}

pub struct RuleRegistry {
    rules: Vec<Box<dyn FixRule>>,
}

impl RuleRegistry {
    pub fn new(rules: Vec<Box<dyn FixRule>>) -> Self {
        Self { rules }
    }

    /// Fold the text buffer through every rule each message triggers, in
    /// message order. Sequential by construction: a later message's rules see
    /// the edits made for earlier messages.
    pub fn apply(&self, original: &str, messages: &[String]) -> FixOutcome {
        let mut fixed = original.to_string();
        let mut issues_fixed = Vec::new();
        let mut issues_unaddressed = Vec::new();
        let mut explanations: Vec<&'static str> = Vec::new();

        for message in messages {
            let mut matched = false;
            for rule in &self.rules {
                if rule.matches(message) {
                    log::debug!("rule {} triggered by: {}", rule.name(), message);
                    fixed = rule.apply(&fixed);
                    matched = true;
                    if !explanations.contains(&rule.describe()) {
                        explanations.push(rule.describe());
                    }
                }
            }
            if matched {
                issues_fixed.push(message.clone());
            } else {
                issues_unaddressed.push(message.clone());
            }
        }

        FixOutcome {
            fixed,
            issues_fixed,
            issues_unaddressed,
            explanations,
        }
    }
}

pub fn default_registry() -> RuleRegistry {
    let rules: Vec<Box<dyn FixRule>> = vec![
        Box::new(PrintCallRule::new()),
        Box::new(DivisionGuardRule),
    ];
    RuleRegistry::new(rules)
}
