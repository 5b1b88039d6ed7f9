/// A page as handed over by a document supplier: a title and its raw wikitext.
///
/// The engine only ever reads `text`; the title is carried for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    text: String,
}

impl Page {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Get the page title, including any namespace prefix
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the raw wikitext
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The namespace part of the title (before the first `:`), or `None` for the main namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.title.split_once(':').map(|(ns, _)| ns)
    }
}

impl From<(String, String)> for Page {
    fn from((title, text): (String, String)) -> Self {
        Self::new(title, text)
    }
}
