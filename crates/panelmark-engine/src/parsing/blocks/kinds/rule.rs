/// Horizontal rule syntax.
pub struct Rule;

impl Rule {
    pub const MARKER: &'static str = "---";

    /// Only `---`, optionally surrounded by whitespace, is a rule.
    pub fn matches(line: &str) -> bool {
        line.trim() == Self::MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rule() {
        assert!(Rule::matches("---"));
        assert!(Rule::matches("  ---\t"));
    }

    #[test]
    fn other_lengths_are_not_rules() {
        assert!(!Rule::matches("--"));
        assert!(!Rule::matches("----"));
        assert!(!Rule::matches("***"));
        assert!(!Rule::matches("--- x"));
    }
}
