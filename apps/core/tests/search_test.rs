use proptest::prelude::*;
use snipkeep_core::model::Snippet;
use snipkeep_core::search::{filter, query_tokens};

#[test]
fn partial_tokens_select_exactly_the_matching_snippet() {
    let snippets = vec![
        Snippet::new("1", "git status", &["git", "status"], ""),
        Snippet::new("2", "docker ps", &["docker"], ""),
    ];

    let result = filter(&snippets, "git st");

    assert_eq!(result, vec![snippets[0].clone()]);
}

fn snippet_strategy() -> impl Strategy<Value = Snippet> {
    (
        "[a-zA-Z ]{1,12}",
        prop::collection::vec("[a-zA-Z]{1,6}", 1..4),
        "[a-zA-Z ]{0,10}",
    )
        .prop_map(|(command, keywords, description)| Snippet {
            id: String::new(),
            command,
            keywords,
            description,
        })
}

fn collection_strategy() -> impl Strategy<Value = Vec<Snippet>> {
    prop::collection::vec(snippet_strategy(), 0..12).prop_map(|mut snippets| {
        for (index, snippet) in snippets.iter_mut().enumerate() {
            snippet.id = index.to_string();
        }
        snippets
    })
}

fn haystack_has_all(snippet: &Snippet, tokens: &[String]) -> bool {
    let text = format!(
        "{} {} {}",
        snippet.command,
        snippet.description,
        snippet.keywords.join(" ")
    )
    .to_lowercase();
    tokens.iter().all(|token| text.contains(token.as_str()))
}

proptest! {
    #[test]
    fn empty_query_is_identity(snippets in collection_strategy(), blanks in "[ \t]{0,4}") {
        prop_assert_eq!(filter(&snippets, &blanks), snippets);
    }

    #[test]
    fn result_is_exactly_the_snippets_matching_every_token(
        snippets in collection_strategy(),
        query in "[a-cA-C ]{1,6}",
    ) {
        let tokens = query_tokens(&query);
        prop_assume!(!tokens.is_empty());

        let result = filter(&snippets, &query);
        let expected: Vec<Snippet> = snippets
            .iter()
            .filter(|snippet| haystack_has_all(snippet, &tokens))
            .cloned()
            .collect();

        prop_assert_eq!(result, expected);
    }

    #[test]
    fn filter_preserves_relative_order(snippets in collection_strategy(), query in "[a-e ]{0,4}") {
        let ids: Vec<usize> = filter(&snippets, &query)
            .iter()
            .map(|snippet| snippet.id.parse().unwrap())
            .collect();
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
