/// Split a comma-separated ingredient list into trimmed tokens.
///
/// Order is preserved. Tokens that are empty after trimming are dropped, so
/// an empty input yields an empty list rather than `[""]`.
pub fn split_ingredients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_preserves_order() {
        assert_eq!(
            split_ingredients(" flour,  sugar ,eggs"),
            vec!["flour", "sugar", "eggs"]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_ingredients("").is_empty());
        assert!(split_ingredients("   ").is_empty());
    }

    #[test]
    fn test_split_drops_blank_tokens() {
        assert_eq!(split_ingredients("salt,, ,pepper,"), vec!["salt", "pepper"]);
    }

    #[test]
    fn test_split_keeps_inner_whitespace() {
        assert_eq!(
            split_ingredients("olive oil, sea salt"),
            vec!["olive oil", "sea salt"]
        );
    }
}
