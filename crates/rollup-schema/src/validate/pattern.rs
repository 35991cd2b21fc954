//! Index pattern matching.
//!
//! Patterns are comma-separated expressions where `*` matches any run of
//! characters, including the empty run.

use regex::Regex;

/// Split a pattern expression into its non-empty parts.
pub fn parts(pattern: &str) -> impl Iterator<Item = &str> {
    pattern.split(',').map(str::trim).filter(|p| !p.is_empty())
}

/// Whether any part of `pattern` matches `index`.
#[must_use]
pub fn matches(pattern: &str, index: &str) -> bool {
    parts(pattern).any(|part| part_regex(part).is_ok_and(|re| re.is_match(index)))
}

/// Whether `pattern` consists of nothing but wildcards.
#[must_use]
pub fn matches_everything(pattern: &str) -> bool {
    parts(pattern).any(|part| part.chars().all(|c| c == '*'))
}

// anchored regex for one part; `*` becomes `.*`, everything else is literal
fn part_regex(part: &str) -> Result<Regex, regex::Error> {
    let body = part
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    Regex::new(&format!("^{body}$"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_patterns_match_exactly() {
        assert!(matches("logs", "logs"));
        assert!(!matches("logs", "logs-1"));
    }

    #[test]
    fn wildcards_match_any_run() {
        assert!(matches("logs-*", "logs-2024"));
        assert!(matches("logs-*", "logs-"));
        assert!(matches("*-rollup", "logs-rollup"));
        assert!(matches("l*s-*-x", "logs-a-b-x"));
        assert!(!matches("l*s-*-x", "logs-a-b-y"));
        assert!(!matches("metrics-*", "logs-2024"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(matches("logs.2024", "logs.2024"));
        assert!(!matches("logs.2024", "logsX2024"));
        assert!(matches("logs+(a)*", "logs+(a)-1"));
    }

    #[test]
    fn comma_separated_parts_are_alternatives() {
        assert!(matches("metrics-*, logs-*", "logs-1"));
        assert!(!matches("metrics-*,traces-*", "logs-1"));
    }

    #[test]
    fn detects_match_all_patterns() {
        assert!(matches_everything("*"));
        assert!(matches_everything("logs-*,**"));
        assert!(!matches_everything("logs-*"));
    }
}
