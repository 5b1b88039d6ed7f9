use serde::Serialize;

use super::{
    escape::strip_escapes,
    kinds::WikiLink,
    scan::{LINK, find_spans},
};

/// An internal link, `[[target]]` or `[[target|text]]`.
///
/// The target is not interpreted, so it may carry a namespace, an interwiki
/// prefix, or name a media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalLink {
    pub target: String,
    /// Display text; the target itself when no alias was given.
    pub text: String,
}

impl InternalLink {
    pub fn new(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
        }
    }
}

/// Parses a whole `[[...]]` span. The first `|` separates target from text.
///
/// Returns `None` unless the input both starts with `[[` and ends with `]]`.
pub fn parse_internal_link(span: &str) -> Option<InternalLink> {
    let inner = span
        .strip_prefix(WikiLink::OPEN)?
        .strip_suffix(WikiLink::CLOSE)?;
    Some(match inner.split_once(WikiLink::ALIAS) {
        Some((target, text)) => InternalLink::new(target, text),
        None => InternalLink::new(inner, inner),
    })
}

/// Every top-level internal link, in document order.
///
/// Links nested inside another link's text are part of the outer link.
/// Media embeds use the same syntax and are included.
pub fn find_internal_links(text: &str) -> Vec<InternalLink> {
    let text = strip_escapes(text);
    find_spans(&text, &LINK)
        .filter(|s| s.closed)
        .filter_map(|s| parse_internal_link(s.span.slice(&text)))
        .collect()
}

/// Replaces every internal link with its display text.
///
/// Media embeds get no special treatment, so their options (`thumb`, sizes…)
/// end up in the output. An unclosed `[[` is kept as written.
pub fn remove_links(text: &str) -> String {
    let text = strip_escapes(text);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for found in find_spans(&text, &LINK).filter(|s| s.closed) {
        let Some(link) = parse_internal_link(found.span.slice(&text)) else {
            continue;
        };
        out.push_str(&text[last..found.span.start]);
        out.push_str(&link.text);
        last = found.span.end;
    }

    out.push_str(&text[last..]);
    out
}
