/// An HTML comment. Its contents never reach the other scanners.
pub struct Comment;

impl Comment {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";
}

/// A verbatim span whose contents are not markup.
pub struct Nowiki;

impl Nowiki {
    pub const OPEN: &'static str = "<nowiki>";
    pub const CLOSE: &'static str = "</nowiki>";
}
