use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Decides whether a normalized submission satisfies a step.
///
/// `normalized_input` has already been trimmed and lowercased; accepted
/// fragments arrive as authored and must be folded by the implementation.
pub trait CommandMatcher: Send + Sync + fmt::Debug {
    fn matches(&self, normalized_input: &str, accepted: &[String]) -> bool;
    fn name(&self) -> &'static str;
}

pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Accepts when any fragment occurs anywhere in the input, so users may append
/// flags and arguments the author did not list.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl CommandMatcher for SubstringMatcher {
    fn matches(&self, normalized_input: &str, accepted: &[String]) -> bool {
        accepted.iter().any(|fragment| {
            let folded = fold_fragment(fragment);
            !folded.is_empty() && normalized_input.contains(folded.as_str())
        })
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Stricter policy: the fragment's words must appear as a contiguous run of
/// whole words in the input. Shell quotes are ignored on both sides.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenMatcher;

impl CommandMatcher for TokenMatcher {
    fn matches(&self, normalized_input: &str, accepted: &[String]) -> bool {
        let input_tokens = tokenize(normalized_input);
        accepted.iter().any(|fragment| {
            let folded = fold_fragment(fragment);
            let fragment_tokens = tokenize(&folded);
            contains_run(&input_tokens, &fragment_tokens)
        })
    }

    fn name(&self) -> &'static str {
        "token"
    }
}

/// Accepted fragments compare the same way the input does once normalized.
fn fold_fragment(fragment: &str) -> String {
    normalize_input(fragment)
}

fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"[^\s"'`]+"#).expect("token regex must compile"))
}

fn tokenize(value: &str) -> Vec<&str> {
    token_regex()
        .find_iter(value)
        .map(|token| token.as_str())
        .collect()
}

fn contains_run(haystack: &[&str], needle: &[&str]) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn normalize_input_trims_and_folds_case() {
        assert_eq!(normalize_input("  DOCKER System DF \n"), "docker system df");
    }

    #[test]
    fn substring_matcher_tolerates_extra_flags() {
        let commands = accepted(&["docker system prune"]);
        assert!(SubstringMatcher.matches("docker system prune -af", &commands));
        assert!(SubstringMatcher.matches("sudo docker system prune", &commands));
        assert!(!SubstringMatcher.matches("docker system df", &commands));
    }

    #[test]
    fn substring_matcher_folds_fragment_case() {
        let commands = accepted(&["kubectl get Pods"]);
        assert!(SubstringMatcher.matches("kubectl get pods -n prod", &commands));
    }

    #[test]
    fn substring_matcher_accepts_partial_words() {
        let commands = accepted(&["docker system d"]);
        assert!(SubstringMatcher.matches("docker system df", &commands));
    }

    #[test]
    fn token_matcher_requires_whole_words() {
        let commands = accepted(&["docker system d"]);
        assert!(!TokenMatcher.matches("docker system df", &commands));

        let commands = accepted(&["docker system prune"]);
        assert!(TokenMatcher.matches("docker system prune -af", &commands));
        assert!(!TokenMatcher.matches("docker system  --verbose prune", &commands));
    }

    #[test]
    fn token_matcher_ignores_shell_quotes() {
        let commands = accepted(&["docker network connect app-network webapp"]);
        assert!(TokenMatcher.matches(
            "docker network connect 'app-network' \"webapp\"",
            &commands
        ));
    }

    #[test]
    fn token_matcher_never_matches_blank_fragment() {
        let commands = accepted(&["   "]);
        assert!(!TokenMatcher.matches("anything", &commands));
    }

    #[test]
    fn padded_fragments_match_their_verbatim_submission() {
        let commands = accepted(&["docker ps ", "  kubectl get pods"]);
        for input in ["docker ps ", "  kubectl get pods"] {
            let normalized = normalize_input(input);
            assert!(SubstringMatcher.matches(&normalized, &commands), "{input:?}");
            assert!(TokenMatcher.matches(&normalized, &commands), "{input:?}");
        }
    }

    #[test]
    fn substring_matcher_never_matches_blank_fragment() {
        let commands = accepted(&["   "]);
        assert!(!SubstringMatcher.matches("anything", &commands));
    }

    #[test]
    fn matcher_names_are_stable() {
        assert_eq!(SubstringMatcher.name(), "substring");
        assert_eq!(TokenMatcher.name(), "token");
    }
}
