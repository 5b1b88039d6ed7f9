//! Cross-module tests for the scanners.
//!
//! Each scanner has unit tests next to it; these exercise how they compose,
//! mostly through round trips between writers and readers.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    diagnostics::Diagnostics,
    options::TemplateOrder,
    parsing::{
        headings::{Heading, parse_heading},
        scan::{DelimitedSpan, Delimiters, LINK, TEMPLATE, find_spans},
        sections::{get_section_text, iterate_headings},
        templates::{ArgKey, make_template, parse_template},
        tokens::{Token, tokenize},
    },
};

fn reparse(src: &str) -> Vec<(ArgKey, String)> {
    let mut diags = Diagnostics::silent();
    let template = parse_template(src, &mut diags).expect("writer output must parse");
    assert!(diags.is_empty(), "unexpected diagnostics for {src}");
    template.args.into_iter().collect()
}

fn args(pairs: &[(ArgKey, &str)]) -> Vec<(ArgKey, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}

fn scan(text: &str, delims: &'static Delimiters) -> Vec<DelimitedSpan> {
    let spans: Vec<_> = find_spans(text, delims).collect();
    invariants::check_spans(text, delims, &spans);
    spans
}

// Headings

#[rstest]
fn heading_lines_round_trip(
    #[values(1, 2, 3, 4, 5, 6)] level: u8,
    #[values("Noun", "Old English", "  padded  ", "a = b", "[[link]] {{t}}")] title: &str,
) {
    let heading = Heading::new(level, title).unwrap();
    let parsed = parse_heading(&heading.to_wikitext()).unwrap();
    assert_eq!(parsed.level(), level);
    assert_eq!(parsed.text(), Some(title.trim()));
}

// Template writer and reader

#[rstest]
fn named_arguments_round_trip(
    #[values(TemplateOrder::Interleaved, TemplateOrder::NumberedFirst)] order: TemplateOrder,
) {
    let named = args(&[
        (ArgKey::named("head"), "cats"),
        (ArgKey::named("sort"), "cat"),
        (ArgKey::named("lang"), "en"),
    ]);
    assert_eq!(reparse(&make_template("t", &named, order)), named);
}

#[rstest]
fn dense_positional_arguments_round_trip(
    #[values(TemplateOrder::Interleaved, TemplateOrder::NumberedFirst)] order: TemplateOrder,
) {
    let positional = args(&[
        (ArgKey::Positional(1), "en"),
        (ArgKey::Positional(2), "cat"),
        (ArgKey::Positional(3), ""),
        (ArgKey::Positional(4), "[[feline|cat]]"),
    ]);
    assert_eq!(reparse(&make_template("l", &positional, order)), positional);
}

#[test]
fn out_of_order_positionals_come_back_dense() {
    let given = args(&[
        (ArgKey::Positional(1), "a"),
        (ArgKey::Positional(3), "c"),
        (ArgKey::Positional(2), "b"),
    ]);
    let src = make_template("t", &given, TemplateOrder::Interleaved);
    assert_eq!(
        reparse(&src),
        args(&[
            (ArgKey::Positional(1), "a"),
            (ArgKey::Positional(2), "b"),
            (ArgKey::Positional(3), "c"),
        ])
    );
}

#[test]
fn parsed_template_writes_itself_back() {
    let src = "{{en-noun|cats|head=[[cat|Cat]]|{{q|x}}}}";
    let template = parse_template(src, &mut Diagnostics::silent()).unwrap();
    assert_eq!(template.to_wikitext(), src);
}

// Spans

#[rstest]
#[case("plain text")]
#[case("[[a]] [[b|c]] [[d|[[e]]]]")]
#[case("[[a]] ]] [[b")]
#[case("{{a}} {{b|{{c}}}} }} {{d|[[e|{{f")]
#[case("[[[[[[]]")]
fn spans_are_ordered_and_disjoint(#[case] text: &str) {
    scan(text, &LINK);
    scan(text, &TEMPLATE);
}

#[test]
fn nested_spans_resolve_the_outer_pair() {
    let spans = scan("x [[A|[[B]]]] y", &LINK);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].span.slice("x [[A|[[B]]]] y"), "[[A|[[B]]]]");
}

// Sections and tokens agree

#[test]
fn tokens_and_sections_see_the_same_headings() {
    let page = "top\n==A==\none\n===A1===\ntwo\n==B==\nthree";

    let from_tokens: Vec<Heading> = tokenize(page, &mut Diagnostics::silent())
        .filter_map(|t| match t {
            Token::Heading(h) if h.level() == 2 => Some(h),
            _ => None,
        })
        .collect();
    let from_sections: Vec<Heading> = iterate_headings(page, 2)
        .unwrap()
        .into_iter()
        .map(|s| s.heading)
        .filter(|h| !h.is_preamble())
        .collect();

    assert_eq!(from_tokens, from_sections);
    assert_eq!(get_section_text(page, 2, "A", true).unwrap(), "one");
    assert_eq!(get_section_text(page, 2, "A", false).unwrap(), "one\n===A1===\ntwo");
}
