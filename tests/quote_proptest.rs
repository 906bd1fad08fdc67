//! Property-based tests for quote markup
//!
//! - Well-formed markup survives parse then serialize unchanged
//! - Arbitrary (often malformed) markup is stable under repeated
//!   parse/serialize
//! - Parsed documents respect the depth guard and keep text coalesced

use proptest::prelude::*;
use quote_markup::{
    parse, parse_with_options, serialize, Document, Node, ParseOptions, MAX_DEPTH_LIMIT,
};

/// Author names: anything without ']' or '['
fn author_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-zA-Z0-9_]{0,12}", "[a-zA-Z0-9 .=/-]{0,12}", "\\PC{0,6}"]
        .prop_map(|s| s.replace([']', '['], ""))
}

/// Plain text that never forms a tag
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-zA-Z0-9 \n]{0,20}", "[a-z\\]=/ ]{0,10}", "\\PC{0,8}"]
        .prop_map(|s| s.replace('[', "("))
}

/// Well-formed markup with every quote closed
fn well_formed_strategy() -> impl Strategy<Value = String> {
    let leaf = text_strategy();
    leaf.prop_recursive(6, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|parts| parts.concat()),
            (author_strategy(), inner)
                .prop_map(|(author, body)| format!("[QUOTE={}]{}[/QUOTE]", author, body)),
        ]
    })
}

/// Tag-heavy fragments, matched or not
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("[QUOTE=".to_string()),
        Just("[/QUOTE]".to_string()),
        Just("]".to_string()),
        Just("[".to_string()),
        author_strategy().prop_map(|a| format!("[QUOTE={}]", a)),
        "[a-z \n]{0,6}",
    ]
}

fn arbitrary_markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..24).prop_map(|parts| parts.concat())
}

fn assert_coalesced(doc: &Document) {
    let mut previous_was_text = false;
    for node in doc.nodes() {
        match node {
            Node::Text(text) => {
                assert!(!text.is_empty(), "empty text node");
                assert!(!previous_was_text, "adjacent text nodes");
                previous_was_text = true;
            }
            Node::Quote(q) => {
                previous_was_text = false;
                assert_coalesced(&q.body);
            }
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_round_trip_well_formed(input in well_formed_strategy()) {
            let doc = parse(&input);
            prop_assert_eq!(serialize(&doc), input);
        }

        #[test]
        fn test_idempotent_on_any_markup(input in arbitrary_markup_strategy()) {
            let once = serialize(&parse(&input));
            let twice = serialize(&parse(&once));
            prop_assert_eq!(&twice, &once);
            prop_assert_eq!(parse(&once), parse(&input));
        }

        #[test]
        fn test_text_nodes_are_coalesced(input in arbitrary_markup_strategy()) {
            assert_coalesced(&parse(&input));
        }

        #[test]
        fn test_depth_guard_holds(
            input in arbitrary_markup_strategy(),
            max_depth in prop_oneof![0usize..4, Just(usize::MAX)],
        ) {
            let options = ParseOptions { max_depth };
            let doc = parse_with_options(&input, &options);
            prop_assert!(doc.depth() <= max_depth.min(MAX_DEPTH_LIMIT));
            prop_assert_eq!(serialize(&doc), input);
        }

        #[test]
        fn test_flat_text_is_single_node(input in text_strategy()) {
            let doc = parse(&input);
            if input.is_empty() {
                prop_assert!(doc.is_empty());
            } else {
                prop_assert_eq!(doc.nodes(), &[Node::text(input.clone())][..]);
            }
        }
    }
}
