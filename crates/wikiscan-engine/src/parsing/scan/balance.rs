use std::sync::OnceLock;

use super::{markers::MarkerSet, span::Span};
use crate::parsing::kinds::{TemplateCall, WikiLink};

/// An opener/closer pair for a nestable construct.
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
    markers: OnceLock<MarkerSet>,
}

/// `[[` … `]]`
pub static LINK: Delimiters = Delimiters::new(WikiLink::OPEN, WikiLink::CLOSE);
/// `{{` … `}}`
pub static TEMPLATE: Delimiters = Delimiters::new(TemplateCall::OPEN, TemplateCall::CLOSE);

impl Delimiters {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close,
            markers: OnceLock::new(),
        }
    }

    fn markers(&self) -> &MarkerSet {
        self.markers.get_or_init(|| {
            MarkerSet::new(&[self.open, self.close]).expect("Invalid delimiter markers")
        })
    }
}

/// Where a balanced scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balanced {
    /// Offset just past the matching closer, or the text length.
    pub end: usize,
    /// False when the input ran out before depth returned to zero.
    pub closed: bool,
}

/// Matches nested delimiters starting just after an opener (depth 1).
///
/// Each further opener raises the depth and each closer lowers it. The scan
/// stops once depth is back to zero; an unbalanced opener runs to the end.
pub fn match_balanced(text: &str, from: usize, delims: &Delimiters) -> Balanced {
    let markers = delims.markers();
    let mut depth = 1usize;
    let mut pos = from;

    while depth > 0 {
        let Some(m) = markers.find(text, pos) else {
            return Balanced {
                end: text.len(),
                closed: false,
            };
        };
        if m.marker == delims.open {
            depth += 1;
        } else {
            depth -= 1;
        }
        pos = m.end();
    }

    Balanced {
        end: pos,
        closed: true,
    }
}

/// A top-level delimited span located by [`find_spans`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedSpan {
    /// From the opener up to and including the matching closer.
    pub span: Span,
    pub closed: bool,
}

/// Iterates the outermost spans of one delimiter kind, left to right.
///
/// Spans nested inside an earlier span are part of it and are not yielded.
pub fn find_spans<'t>(
    text: &'t str,
    delims: &'static Delimiters,
) -> impl Iterator<Item = DelimitedSpan> + 't {
    let mut start = 0usize;
    std::iter::from_fn(move || {
        let open_at = start + text.get(start..)?.find(delims.open)?;
        let balanced = match_balanced(text, open_at + delims.open.len(), delims);
        start = balanced.end;
        Some(DelimitedSpan {
            span: Span::new(open_at, balanced.end),
            closed: balanced.closed,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_link() {
        let text = "[[a]] rest";
        assert_eq!(
            match_balanced(text, 2, &LINK),
            Balanced {
                end: 5,
                closed: true
            }
        );
    }

    #[test]
    fn nested_link_closes_at_outer_pair() {
        let text = "[[A|[[B]]]] tail";
        let b = match_balanced(text, 2, &LINK);
        assert!(b.closed);
        assert_eq!(&text[..b.end], "[[A|[[B]]]]");
    }

    #[test]
    fn nested_templates() {
        let text = "{{a|{{b|{{c}}}}|d}}x";
        let b = match_balanced(text, 2, &TEMPLATE);
        assert_eq!(&text[..b.end], "{{a|{{b|{{c}}}}|d}}");
    }

    #[test]
    fn template_ignores_link_delimiters() {
        let text = "{{t|[[a|b]]}}";
        let b = match_balanced(text, 2, &TEMPLATE);
        assert_eq!(b.end, text.len());
        assert!(b.closed);
    }

    #[test]
    fn unbalanced_runs_to_end() {
        let text = "{{t|{{inner}}";
        assert_eq!(
            match_balanced(text, 2, &TEMPLATE),
            Balanced {
                end: text.len(),
                closed: false
            }
        );
    }

    #[test]
    fn find_spans_yields_outermost_only() {
        let text = "x [[a|[[b]]]] y [[c]] {{not a link}}";
        let spans: Vec<&str> = find_spans(text, &LINK)
            .map(|s| s.span.slice(text))
            .collect();
        assert_eq!(spans, vec!["[[a|[[b]]]]", "[[c]]"]);
    }

    #[test]
    fn find_spans_reports_unclosed_tail() {
        let text = "{{a}} {{b";
        let spans: Vec<DelimitedSpan> = find_spans(text, &TEMPLATE).collect();
        assert_eq!(spans.len(), 2);
        assert!(spans[0].closed);
        assert_eq!(spans[1].span, Span::new(6, 9));
        assert!(!spans[1].closed);
    }

    #[test]
    fn find_spans_on_text_without_openers() {
        assert_eq!(find_spans("plain", &LINK).count(), 0);
        assert_eq!(find_spans("", &TEMPLATE).count(), 0);
    }
}
