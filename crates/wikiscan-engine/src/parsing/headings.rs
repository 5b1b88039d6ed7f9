use std::fmt;

use serde::Serialize;

use super::kinds::HeadingMarker;
use crate::error::WikitextError;

/// Deepest heading level; longer `=` runs are capped to it.
pub const MAXIMUM_HEADING_LEVEL: u8 = 6;

/// A wikitext heading such as `===Etymology===`.
///
/// Higher levels are "inner": a level 3 heading is a subheading of the level 2
/// heading before it. `text` is `None` only for the untitled run of content
/// that precedes the first heading of a level.
///
/// Values are only built through [`Heading::new`], [`Heading::preamble`] or
/// [`parse_heading`], so `level` is always within `1..=6`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub(crate) level: u8,
    pub(crate) text: Option<String>,
}

impl Heading {
    /// A titled heading. Fails on levels outside `1..=6`.
    pub fn new(level: u8, text: impl Into<String>) -> Result<Self, WikitextError> {
        Ok(Self {
            level: WikitextError::check_level(level)?,
            text: Some(text.into().trim().to_string()),
        })
    }

    /// The untitled heading for content before the first heading of `level`.
    pub fn preamble(level: u8) -> Result<Self, WikitextError> {
        Ok(Self {
            level: WikitextError::check_level(level)?,
            text: None,
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// The trimmed title; `None` for a preamble.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_preamble(&self) -> bool {
        self.text.is_none()
    }

    /// Renders the heading line, e.g. `==English==`.
    ///
    /// A title that starts or ends with `=` merges into the surrounding run,
    /// so `==x===` does not parse back as level 2.
    pub fn to_wikitext(&self) -> String {
        let run = HeadingMarker::run(self.level);
        format!("{run}{}{run}", self.text.as_deref().unwrap_or_default())
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wikitext())
    }
}

/// Parses a single line as a heading.
///
/// The line must start and end with `=` runs of equal length (each capped at
/// 6); trailing whitespace is ignored. Returns `None` for anything else,
/// including multi-line input, `==Title=` and lines made only of `=`.
pub fn parse_heading(line: &str) -> Option<Heading> {
    parse_heading_line(line).map(|line| line.heading)
}

/// A heading line together with the uncapped lengths of its `=` runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeadingLine {
    pub heading: Heading,
    pub opening: usize,
    pub closing: usize,
}

impl HeadingLine {
    /// True when both runs are exactly `level` long, so `===x===` is not level 2.
    pub fn is_exactly(&self, level: u8) -> bool {
        let level = usize::from(level);
        self.opening == level && self.closing == level
    }
}

pub(crate) fn parse_heading_line(line: &str) -> Option<HeadingLine> {
    if line.contains('\n') {
        return None;
    }
    let line = line.trim_end();

    let opening = line.chars().take_while(|&c| c == HeadingMarker::EQ).count();
    if opening == 0 || opening == line.len() {
        return None;
    }
    let closing = line
        .chars()
        .rev()
        .take_while(|&c| c == HeadingMarker::EQ)
        .count();

    let cap = usize::from(MAXIMUM_HEADING_LEVEL);
    let level = opening.min(cap);
    if level != closing.min(cap) {
        return None;
    }

    let text = line[level..line.len() - level].trim().to_string();
    Some(HeadingLine {
        heading: Heading {
            level: u8::try_from(level).ok()?,
            text: Some(text),
        },
        opening,
        closing,
    })
}
