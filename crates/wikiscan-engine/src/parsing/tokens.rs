use std::{collections::VecDeque, sync::OnceLock};

use serde::Serialize;

use super::{
    escape::strip_escapes,
    headings::{Heading, parse_heading},
    kinds::{TemplateCall, WikiLink},
    links::{InternalLink, parse_internal_link},
    scan::{LINK, MarkerSet, TEMPLATE, match_balanced},
    templates::{Template, parse_template},
};
use crate::diagnostics::Diagnostics;

/// One item of the document-order stream produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    /// A run of lines that are neither headings nor part of a link or template.
    Text(String),
    Heading(Heading),
    Link(InternalLink),
    Template(Template),
}

/// Lazily splits wikitext into text, headings, links and templates.
///
/// Created by [`tokenize`]. Each call to `next` scans only as far as the next
/// link or template opener.
pub struct Tokens<'d> {
    text: String,
    pos: usize,
    pending: VecDeque<Token>,
    diagnostics: &'d mut Diagnostics,
}

/// Tokenizes `text` in one left-to-right pass after stripping escapes.
///
/// Text between links and templates is split into lines; heading lines become
/// [`Token::Heading`] and the runs of lines between them [`Token::Text`]. A
/// link or template left open at the end of the input is emitted as text.
pub fn tokenize<'d>(text: &str, diagnostics: &'d mut Diagnostics) -> Tokens<'d> {
    Tokens {
        text: strip_escapes(text),
        pos: 0,
        pending: VecDeque::new(),
        diagnostics,
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            self.pos = step(&self.text, self.pos, self.diagnostics, &mut self.pending);
        }
    }
}

fn span_openers() -> &'static MarkerSet {
    static SET: OnceLock<MarkerSet> = OnceLock::new();
    SET.get_or_init(|| {
        MarkerSet::new(&[WikiLink::OPEN, TemplateCall::OPEN]).expect("Invalid span openers")
    })
}

/// Consumes the text up to and including the next link or template.
fn step(
    text: &str,
    pos: usize,
    diagnostics: &mut Diagnostics,
    out: &mut VecDeque<Token>,
) -> usize {
    let Some(m) = span_openers().find(text, pos) else {
        push_lines(&text[pos..], out);
        return text.len();
    };

    let delims = if m.marker == WikiLink::OPEN {
        &LINK
    } else {
        &TEMPLATE
    };
    let balanced = match_balanced(text, m.end(), delims);
    if !balanced.closed {
        log::trace!(target: "wikiscan", "unclosed {} at byte {}", m.marker, m.start);
        push_lines(&text[pos..], out);
        return text.len();
    }

    let span = &text[m.start..balanced.end];
    let token = if delims.open == WikiLink::OPEN {
        parse_internal_link(span).map(Token::Link)
    } else {
        parse_template(span, diagnostics).map(Token::Template)
    };

    if m.start > pos {
        push_lines(&text[pos..m.start], out);
    }
    match token {
        Some(token) => out.push_back(token),
        None => push_lines(span, out),
    }
    balanced.end
}

/// Splits a chunk into heading tokens and text runs, line by line.
fn push_lines(chunk: &str, out: &mut VecDeque<Token>) {
    let mut leftover: Vec<&str> = Vec::new();

    for line in chunk.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match parse_heading(line) {
            Some(heading) => {
                if !leftover.is_empty() {
                    out.push_back(Token::Text(leftover.join("\n")));
                    leftover.clear();
                }
                out.push_back(Token::Heading(heading));
            }
            None => leftover.push(line),
        }
    }

    if !leftover.is_empty() {
        out.push_back(Token::Text(leftover.join("\n")));
    }
}
