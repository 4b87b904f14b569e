/// Splits a comma-separated username list, trimming each entry and dropping blanks.
pub fn parse_usernames(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_blanks() {
        assert_eq!(parse_usernames(" alice , bob,,carol "), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_usernames("").is_empty());
        assert!(parse_usernames(",  ,").is_empty());
        assert!(parse_usernames("   ").is_empty());
    }

    #[test]
    fn test_parse_keeps_case() {
        assert_eq!(parse_usernames("Alice"), vec!["Alice"]);
    }
}
