#![deny(unsafe_code)]

mod app;
mod char_class;
mod checker;
mod error;
mod parser;
mod selector;
mod specificity;
mod utils;

pub use app::{Config, DumpLevel, run};
pub use char_class::CharacterClass;
pub use error::{Result, SyntaxError};
pub use selector::{
    ParsedSelector, PseudoClassSelector, PseudoElementSelector, SimpleSelectorNode, Specificity,
};
pub use utils::PrintableTree;

/// Parses a comma-separated list of selectors into one `ParsedSelector` per
/// entry, in input order. A blank input yields an empty list; the first
/// entry that violates the selector grammar aborts the whole call. Callers
/// wanting partial results must pre-split and call per entry.
pub fn parse_selector_list(input: &str) -> Result<Vec<ParsedSelector>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }
    split(input)
        .iter()
        .map(|entry| {
            checker::check(entry)?;
            let builder = parser::SelectorParser::new(entry).parse()?;
            Ok(specificity::reduce(entry, builder))
        })
        .collect()
}

/// Splits on top-level commas and trims each piece. Empty pieces are kept;
/// they fail in the pre-checker with a precise diagnostic rather than being
/// silently dropped.
fn split(input: &str) -> Vec<String> {
    input.split(',').map(|piece| piece.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_yields_an_empty_list() {
        assert_eq!(parse_selector_list(""), Ok(Vec::new()));
        assert_eq!(parse_selector_list("   "), Ok(Vec::new()));
    }

    #[test]
    fn split_keeps_empty_pieces() {
        assert_eq!(split("a, b"), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            split("a,,b"),
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn empty_list_entry_is_an_error() {
        assert_eq!(
            parse_selector_list("div,,span"),
            Err(SyntaxError::TrailingCharacter(String::new()))
        );
    }

    #[test]
    fn parse_compound_selector() {
        let parsed = parse_selector_list("div.a.b#x").unwrap();
        assert_eq!(parsed.len(), 1);
        let entry = &parsed[0];
        assert_eq!(entry.source_text, "div.a.b#x");
        assert_eq!(entry.specificity, (1, 2, 1));
        assert_eq!(
            entry.tree,
            SimpleSelectorNode {
                tag_name: Some("div".to_string()),
                id_name: Some("x".to_string()),
                class_names: vec!["a".to_string(), "b".to_string()],
                ..Default::default()
            }
        );
    }

    #[test]
    fn parse_combinator_chain() {
        let parsed = parse_selector_list("a > b c").unwrap();
        assert_eq!(parsed.len(), 1);
        let entry = &parsed[0];
        assert_eq!(entry.specificity, (0, 0, 3));
        assert_eq!(
            entry.tree,
            SimpleSelectorNode {
                tag_name: Some("a".to_string()),
                combinator_child: Some(Box::new(SimpleSelectorNode {
                    tag_name: Some("b".to_string()),
                    combinator_descendant: Some(Box::new(SimpleSelectorNode {
                        tag_name: Some("c".to_string()),
                        ..Default::default()
                    })),
                    ..Default::default()
                })),
                ..Default::default()
            }
        );
    }

    #[test]
    fn parse_pseudo_element_with_scoped_pseudo_class() {
        let parsed = parse_selector_list("::before:hover").unwrap();
        let entry = &parsed[0];
        assert_eq!(entry.specificity, (0, 1, 1));
        let pseudo_element = entry.tree.pseudo_element.as_ref().unwrap();
        assert_eq!(pseudo_element.name, "before");
        let children = pseudo_element.children.as_deref().unwrap();
        assert_eq!(children.pseudo_class.as_ref().unwrap().name, "hover");
    }

    #[test]
    fn parse_nested_pseudo_classes() {
        let parsed = parse_selector_list("a:hover:focus").unwrap();
        let entry = &parsed[0];
        assert_eq!(entry.specificity, (0, 2, 1));
        let pseudo_class = entry.tree.pseudo_class.as_ref().unwrap();
        assert_eq!(pseudo_class.name, "hover");
        let nested = pseudo_class.nested.as_deref().unwrap();
        assert_eq!(nested.pseudo_class.as_ref().unwrap().name, "focus");
    }

    #[test]
    fn parse_selector_list_with_comma() {
        let parsed = parse_selector_list("div, span#x").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].source_text, "div");
        assert_eq!(parsed[0].specificity, (0, 0, 1));
        assert_eq!(parsed[1].source_text, "span#x");
        assert_eq!(parsed[1].specificity, (1, 0, 1));
    }

    #[test]
    fn one_bad_entry_aborts_the_whole_list() {
        assert_eq!(
            parse_selector_list("div, 1abc, span"),
            Err(SyntaxError::LeadingDigit("tag"))
        );
    }

    #[test]
    fn leading_digit_is_rejected() {
        assert_eq!(
            parse_selector_list("1abc"),
            Err(SyntaxError::LeadingDigit("tag"))
        );
    }

    #[test]
    fn double_child_combinator_is_rejected() {
        assert_eq!(
            parse_selector_list("a >> b"),
            Err(SyntaxError::DoubleChildCombinator)
        );
    }

    #[test]
    fn triple_pseudo_sign_is_rejected() {
        assert_eq!(
            parse_selector_list("a:::hover"),
            Err(SyntaxError::UnexpectedPseudoSign)
        );
    }

    #[test]
    fn trailing_sign_is_rejected_with_the_full_entry() {
        assert_eq!(
            parse_selector_list("div."),
            Err(SyntaxError::TrailingCharacter("div.".to_string()))
        );
    }

    #[test]
    fn reparsing_source_text_is_idempotent() {
        let inputs = [
            "div.a.b#x",
            "a > b c",
            "::before:hover",
            ":hover:focus",
            "ul li.red > #x, *:first-child",
        ];
        for input in inputs {
            for entry in parse_selector_list(input).unwrap() {
                let reparsed = parse_selector_list(&entry.source_text).unwrap();
                assert_eq!(reparsed.len(), 1);
                assert_eq!(reparsed[0], entry);
            }
        }
    }
}
