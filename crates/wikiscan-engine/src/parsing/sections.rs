//! # Sections
//!
//! Line-oriented decomposition of wikitext into sections.
//!
//! A section is a heading plus the body text it owns. There is no explicit
//! tree: the children of a level *n* section are found by splitting its body
//! at level *n + 1*, so each level is computed independently and on demand.

use serde::Serialize;

use super::{
    escape::strip_escapes,
    headings::{Heading, MAXIMUM_HEADING_LEVEL, parse_heading, parse_heading_line},
};
use crate::error::WikitextError;

/// A heading and the text under it, up to the next heading of the same level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: Heading,
    pub text: String,
}

/// Splits `text` into the sections of one heading level.
///
/// The first section holds everything before the first heading of `level`
/// and has an untitled heading. Nested headings stay in the body text.
pub fn iterate_headings(text: &str, level: u8) -> Result<Vec<Section>, WikitextError> {
    let level = WikitextError::check_level(level)?;
    Ok(split_sections(&strip_escapes(text), level))
}

/// Walks every section of every level, depth first in document order.
///
/// Each level 1 section is followed by the level 2 sections of its body, each
/// of those by its level 3 sections, and so on down to level 6. For
/// `"==H==\nText 1\n===Sub===\nText 2"` the level 2 section `H` holds the whole
/// body and is followed by `(3, None) => "Text 1"` and `(3, "Sub") => "Text 2"`.
pub fn iterate_sections(text: &str) -> Vec<Section> {
    let mut out = Vec::new();
    collect_sections(&strip_escapes(text), 1, &mut out);
    out
}

fn collect_sections(text: &str, level: u8, out: &mut Vec<Section>) {
    for section in split_sections(text, level) {
        let body = section.text.clone();
        out.push(section);
        if level < MAXIMUM_HEADING_LEVEL {
            collect_sections(&body, level + 1, out);
        }
    }
}

fn split_sections(text: &str, level: u8) -> Vec<Section> {
    let lines: Vec<&str> = text.lines().collect();
    let mut sections = Vec::new();
    let mut title = None;
    let mut body_start = 0;

    for (i, line) in lines.iter().enumerate() {
        let Some(found) = parse_heading_line(line).filter(|h| h.is_exactly(level)) else {
            continue;
        };
        sections.push(Section {
            heading: Heading {
                level,
                text: title.take(),
            },
            text: lines[body_start..i].join("\n"),
        });
        title = found.heading.text;
        body_start = i + 1;
    }

    sections.push(Section {
        heading: Heading { level, text: title },
        text: lines[body_start..].join("\n"),
    });
    sections
}

/// Returns the text under the first heading matching `level` and `heading`.
///
/// The body ends at the next heading of the same or a higher rank. With
/// `top` set it ends at the next heading of any level, leaving out
/// subsections.
pub fn get_section_text(
    text: &str,
    level: u8,
    heading: &str,
    top: bool,
) -> Result<String, WikitextError> {
    let level = WikitextError::check_level(level)?;
    section_text_in(&strip_escapes(text), level, heading, top)
}

fn section_text_in(
    text: &str,
    level: u8,
    heading: &str,
    top: bool,
) -> Result<String, WikitextError> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| is_heading(line, level, heading))
        .ok_or_else(|| WikitextError::HeadingNotFound {
            level,
            heading: heading.to_string(),
        })?
        + 1;

    let end = lines[start..]
        .iter()
        .position(|line| parse_heading(line).is_some_and(|h| top || h.level <= level))
        .map_or(lines.len(), |i| start + i);

    Ok(lines[start..end].join("\n"))
}

/// Whether `text` has a heading of `level` whose text is `heading`.
pub fn contains_heading(text: &str, level: u8, heading: &str) -> Result<bool, WikitextError> {
    let level = WikitextError::check_level(level)?;
    Ok(contains_in(&strip_escapes(text), level, heading))
}

/// Whether a `level` heading titled `heading` sits inside the first
/// `level - 1` section titled `parent`.
///
/// A missing parent is simply `false`. `level` must be 2 or more.
pub fn contains_heading_under(
    text: &str,
    level: u8,
    heading: &str,
    parent: &str,
) -> Result<bool, WikitextError> {
    let level = WikitextError::check_level(level)?;
    if level < 2 {
        return Err(WikitextError::InvalidLevel { level });
    }
    match section_text_in(&strip_escapes(text), level - 1, parent, false) {
        Ok(body) => Ok(contains_in(&body, level, heading)),
        Err(WikitextError::HeadingNotFound { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

fn contains_in(text: &str, level: u8, heading: &str) -> bool {
    text.lines().any(|line| is_heading(line, level, heading))
}

fn is_heading(line: &str, level: u8, heading: &str) -> bool {
    parse_heading(line).is_some_and(|h| h.level == level && h.text.as_deref() == Some(heading))
}
