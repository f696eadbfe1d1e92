use crate::model::Snippet;

/// Lowercased, whitespace-split query tokens. Empty for a blank query.
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Snippets whose haystack contains every query token, in their original order.
/// A blank query returns the full collection.
pub fn filter(snippets: &[Snippet], query: &str) -> Vec<Snippet> {
    filter_indices(snippets, query)
        .into_iter()
        .map(|index| snippets[index].clone())
        .collect()
}

pub fn filter_indices(snippets: &[Snippet], query: &str) -> Vec<usize> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return (0..snippets.len()).collect();
    }

    snippets
        .iter()
        .enumerate()
        .filter_map(|(index, snippet)| matches_all(snippet, &tokens).then_some(index))
        .collect()
}

pub fn matches_all(snippet: &Snippet, tokens: &[String]) -> bool {
    let haystack = snippet.haystack();
    tokens.iter().all(|token| haystack.contains(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_indices, query_tokens};
    use crate::model::Snippet;

    fn sample() -> Vec<Snippet> {
        vec![
            Snippet::new("1", "git status", &["git", "status"], ""),
            Snippet::new("2", "docker ps", &["docker"], "List running containers"),
            Snippet::new("3", "git log --oneline", &["git", "history"], ""),
        ]
    }

    #[test]
    fn tokens_are_lowercased_and_split_on_whitespace_runs() {
        assert_eq!(query_tokens("  Git \t ST  "), vec!["git", "st"]);
        assert!(query_tokens(" \n ").is_empty());
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let snippets = sample();
        assert_eq!(filter(&snippets, ""), snippets);
        assert_eq!(filter(&snippets, "   "), snippets);
    }

    #[test]
    fn all_tokens_must_match() {
        let result = filter(&sample(), "git st");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn tokens_match_inside_words() {
        let snippets = vec![Snippet::new("1", "run command", &["x"], "")];
        assert_eq!(filter(&snippets, "mand").len(), 1);
    }

    #[test]
    fn description_is_searchable_case_insensitively() {
        assert_eq!(filter_indices(&sample(), "RUNNING"), vec![1]);
    }

    #[test]
    fn matches_keep_original_order() {
        assert_eq!(filter_indices(&sample(), "git"), vec![0, 2]);
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        assert!(filter(&[], "git").is_empty());
        assert!(filter(&[], "").is_empty());
    }
}
