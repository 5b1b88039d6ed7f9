//! # Diagnostics
//!
//! Non-fatal notices raised while parsing. A [`Diagnostics`] collector is
//! passed alongside parse calls; pushing to it never changes what the parser
//! returns, so callers are free to ignore it.
//!
//! Every pushed diagnostic is also forwarded to the `log` facade at `warn`
//! level unless the collector was created with logging disabled.

use crate::parsing::templates::ArgKey;

/// A soft anomaly found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A template argument key appeared more than once; the later value won.
    #[error("duplicate parameter {key}: {replacement} to replace existing {key}={previous}")]
    DuplicateArgument {
        /// Name of the template being parsed.
        template: String,
        key: ArgKey,
        previous: String,
        replacement: String,
    },
}

/// Collects [`Diagnostic`]s in the order they were raised.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    forward_to_log: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            forward_to_log: true,
        }
    }

    /// A collector that records diagnostics without emitting log records.
    pub fn silent() -> Self {
        Self {
            items: Vec::new(),
            forward_to_log: false,
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.forward_to_log {
            log::warn!(target: "wikiscan", "{diagnostic}");
        }
        self.items.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
