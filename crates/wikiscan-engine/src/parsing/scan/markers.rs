use regex::Regex;

/// One hit from [`MarkerSet::find`]: where it starts and which marker matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'t> {
    pub start: usize,
    pub marker: &'t str,
}

impl MarkerMatch<'_> {
    /// Offset just past the matched marker.
    pub fn end(&self) -> usize {
        self.start + self.marker.len()
    }
}

/// A set of literal markers searched for together.
///
/// Markers are compiled into one alternation so a single pass finds the
/// earliest of them. When two markers start at the same offset the one listed
/// first wins.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    markers: Vec<String>,
    pattern: Option<Regex>,
}

impl MarkerSet {
    /// Builds a set from literal markers. Empty markers are ignored.
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Result<Self, regex::Error> {
        let markers: Vec<String> = markers
            .iter()
            .map(|m| m.as_ref().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        let pattern = if markers.is_empty() {
            None
        } else {
            let alternation = markers
                .iter()
                .map(|m| escape_marker(m))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&alternation)?)
        };

        Ok(Self { markers, pattern })
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Finds the earliest marker at or after byte offset `from`.
    ///
    /// `from` must lie on a char boundary; offsets past the end find nothing.
    pub fn find<'t>(&self, text: &'t str, from: usize) -> Option<MarkerMatch<'t>> {
        if from > text.len() {
            return None;
        }
        let m = self.pattern.as_ref()?.find_at(text, from)?;
        Some(MarkerMatch {
            start: m.start(),
            marker: m.as_str(),
        })
    }
}

/// Escapes a literal so the pattern engine matches it byte for byte.
fn escape_marker(marker: &str) -> String {
    regex::escape(marker)
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
