use std::sync::OnceLock;

use super::{
    kinds::{Comment, Nowiki},
    scan::MarkerSet,
};

fn escape_openers() -> &'static MarkerSet {
    static OPENERS: OnceLock<MarkerSet> = OnceLock::new();
    OPENERS.get_or_init(|| {
        MarkerSet::new(&[Comment::OPEN, Nowiki::OPEN]).expect("Invalid escape markers")
    })
}

/// Removes comment and `<nowiki>` spans, delimiters included.
///
/// The earliest opener wins and its own closer ends the span; the other kind
/// is not recognised inside it. A missing closer swallows the rest of the
/// text. Every other scanner expects text that has been through here.
pub fn strip_escapes(text: &str) -> String {
    let openers = escape_openers();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0usize;

    while let Some(m) = openers.find(text, pos) {
        out.push_str(&text[pos..m.start]);
        let close = if m.marker == Comment::OPEN {
            Comment::CLOSE
        } else {
            Nowiki::CLOSE
        };
        pos = match text[m.end()..].find(close) {
            Some(i) => m.end() + i + close.len(),
            None => text.len(),
        };
    }

    out.push_str(&text[pos..]);
    out
}
