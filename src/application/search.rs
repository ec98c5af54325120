//! Search filtering for displayed username lists.

/// Keeps usernames containing `query`, ignoring case.
///
/// A blank query returns the list unchanged.
#[must_use]
pub fn filter_usernames(usernames: &[String], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return usernames.to_vec();
    }

    let query = query.to_lowercase();
    usernames
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let names = list(&["alice", "bob"]);
        assert_eq!(filter_usernames(&names, ""), names);
        assert_eq!(filter_usernames(&names, "   "), names);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let names = list(&["Alice_Smith", "bob", "malice"]);
        assert_eq!(filter_usernames(&names, " ALI "), ["Alice_Smith", "malice"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_usernames(&list(&["alice"]), "zed").is_empty());
    }
}
