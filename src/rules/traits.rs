/// A mechanical, line-level source transformation triggered by keywords in a
/// scan finding's message. Rules are total over text: `apply` never fails,
/// it returns the input unchanged when there is nothing to rewrite.
pub trait FixRule: Send + Sync {
    /// Short identifier for logs and reports
    fn name(&self) -> &'static str;

    /// One-line description of what an application of the rule did
    fn describe(&self) -> &'static str;

    /// Whether this rule handles the given issue message
    fn matches(&self, message: &str) -> bool;

    /// Rewrite the text; later rules see this rule's edits
    fn apply(&self, text: &str) -> String;
}
