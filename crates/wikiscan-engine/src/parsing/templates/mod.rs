//! # Templates
//!
//! Template invocations (`{{name|arg|key=value}}`): parsing one span into an
//! ordered argument map, writing one back out, and document-level queries.
//!
//! ## Modules
//!
//! - **`args`**: `ArgKey`, `TemplateArgs` and the positional helpers
//! - **`parse`**: `Template` and `parse_template`, the dual-depth argument splitter
//! - **`serialize`**: `make_template`, interleaved and numbered-first output
//!
//! ## Argument Rules
//!
//! - The first chunk is the name and is never split on `=`
//! - `|` and `=` inside nested `{{…}}` or `[[…]]` are ordinary text
//! - Only the first top-level `=` of an argument splits key from value
//! - Unlabeled arguments are numbered 1, 2, 3… in order of appearance

pub mod args;
pub mod parse;
pub mod serialize;

pub use args::{ArgKey, TemplateArgs, positional_args, shift_args};
pub use parse::{Template, parse_template};
pub use serialize::make_template;

use super::{
    escape::strip_escapes,
    scan::{TEMPLATE, find_spans},
};
use crate::diagnostics::Diagnostics;

/// What to put in place of a template invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Leave the invocation as it was.
    Keep,
    /// Delete the invocation.
    Remove,
    /// Substitute this text.
    With(String),
}

/// Every top-level template invocation, in document order.
///
/// Invocations nested in another one's arguments are part of it. An
/// invocation left open at the end of the text is skipped.
pub fn find_templates(text: &str, diagnostics: &mut Diagnostics) -> Vec<Template> {
    let text = strip_escapes(text);
    find_spans(&text, &TEMPLATE)
        .filter(|s| s.closed)
        .filter_map(|s| parse_template(s.span.slice(&text), diagnostics))
        .collect()
}

/// Like [`find_templates`], keeping only invocations of `name`.
pub fn find_templates_by_name(
    text: &str,
    name: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<Template> {
    find_templates(text, diagnostics)
        .into_iter()
        .filter(|t| t.name == name)
        .collect()
}

/// Rewrites every top-level invocation with whatever `replace` returns.
///
/// The result is built from the escape-stripped text, so comments and
/// `<nowiki>` spans do not survive.
pub fn replace_templates<F>(text: &str, diagnostics: &mut Diagnostics, mut replace: F) -> String
where
    F: FnMut(&Template) -> Replacement,
{
    let text = strip_escapes(text);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for found in find_spans(&text, &TEMPLATE).filter(|s| s.closed) {
        let Some(template) = parse_template(found.span.slice(&text), diagnostics) else {
            continue;
        };
        out.push_str(&text[last..found.span.start]);
        match replace(&template) {
            Replacement::Keep => out.push_str(&template.src),
            Replacement::Remove => {}
            Replacement::With(new_text) => out.push_str(&new_text),
        }
        last = found.span.end;
    }

    out.push_str(&text[last..]);
    out
}

/// Like [`replace_templates`], but only where `filter` holds.
pub fn replace_templates_if<P, F>(
    text: &str,
    diagnostics: &mut Diagnostics,
    mut filter: P,
    mut replace: F,
) -> String
where
    P: FnMut(&Template) -> bool,
    F: FnMut(&Template) -> Replacement,
{
    replace_templates(text, diagnostics, |template| {
        if filter(template) {
            replace(template)
        } else {
            Replacement::Keep
        }
    })
}
