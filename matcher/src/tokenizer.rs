//! Input normalization shared by every matching strategy.
//!
//! All strategies tokenize through [`tokenize`] so they agree on trimming,
//! casing and whitespace handling. The answer strategy additionally keys
//! combinations by [`signature`], which makes comparisons order-independent.

/// Normalizes a raw class string into lowercase tokens.
///
/// Lowercases the input and splits on runs of whitespace, so leading and
/// trailing space, tabs and newlines all disappear. Never fails; empty or
/// whitespace-only input yields an empty vec.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}

/// Order-independent key for a token list: the tokens sorted
/// lexicographically and rejoined with single spaces.
///
/// Duplicates are kept, so the key identifies the token multiset rather than
/// the token set.
pub fn signature(tokens: &[String]) -> String {
    let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_lowercases_and_splits() {
        assert_eq!(
            tokenize("  Flex   Items-Center  "),
            vec!["flex", "items-center"]
        );
        assert_eq!(tokenize("BG-Blue-500\tp-4\nshadow"), vec![
            "bg-blue-500",
            "p-4",
            "shadow"
        ]);
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let inputs = [
            "  Flex   Items-Center  ",
            "bg-blue-500 p-4",
            "",
            "  a  B   c-D ",
        ];
        for input in inputs {
            let once = tokenize(input);
            let twice = tokenize(&once.join(" "));
            assert_eq!(once, twice, "re-tokenizing changed {input:?}");
        }
    }

    #[test]
    fn test_signature_is_order_independent() {
        let a = tokenize("flex items-center justify-between");
        let b = tokenize("justify-between items-center flex");
        assert_eq!(signature(&a), signature(&b));
    }

    #[test]
    fn test_signature_keeps_duplicates() {
        let tokens = tokenize("p-4 p-4 flex");
        assert_eq!(signature(&tokens), "flex p-4 p-4");
        assert_ne!(signature(&tokens), signature(&tokenize("p-4 flex")));
    }
}
