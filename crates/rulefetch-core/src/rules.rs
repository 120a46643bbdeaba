//! Rule-list text parsing.
//!
//! A rule list is plain text, one rule per line. Line endings in the wild are
//! mixed (`\n`, `\r\n`, bare `\r`), so splitting treats any run of CR/LF
//! characters as one boundary.

/// Ordered rules extracted from a text payload.
pub type RuleSet = Vec<String>;

/// Splits a text payload into trimmed, non-empty rules.
///
/// Runs of CR/LF collapse into a single boundary; a trailing newline does not
/// produce an empty element. Empty or whitespace-only input yields an empty
/// set.
pub fn split_rules(text: &str) -> RuleSet {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_mixed_line_endings() {
        assert_eq!(
            split_rules("rule1\nrule2\r\nrule3\rrule4"),
            vec!["rule1", "rule2", "rule3", "rule4"]
        );
    }

    #[test]
    fn collapses_blank_lines() {
        assert_eq!(split_rules("rule1\n\n\nrule2"), vec!["rule1", "rule2"]);
    }

    #[test]
    fn trailing_newline_adds_nothing() {
        assert_eq!(split_rules("rule1\nrule2\n"), vec!["rule1", "rule2"]);
    }

    #[test]
    fn trims_each_rule() {
        assert_eq!(split_rules("  rule1  \n\trule2\t"), vec!["rule1", "rule2"]);
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_rules() {
        assert!(split_rules("").is_empty());
        assert!(split_rules("  \r\n \n ").is_empty());
    }

    #[test]
    fn comment_lines_pass_through_verbatim() {
        // Filter lists carry "!" comment lines; splitting must not touch them.
        assert_eq!(
            split_rules("! Title: list\n||example.org^"),
            vec!["! Title: list", "||example.org^"]
        );
    }
}
