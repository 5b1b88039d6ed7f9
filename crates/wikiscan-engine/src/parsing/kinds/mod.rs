//! # Markup Kinds
//!
//! Types that own the literal delimiters of each wikitext construct.
//!
//! ## Types
//!
//! - **`Comment`**, **`Nowiki`**: escape spans removed before any other scan
//! - **`WikiLink`**: `OPEN = "[["`, `CLOSE = "]]"`, `ALIAS = "|"`
//! - **`TemplateCall`**: `OPEN = "{{"`, `CLOSE = "}}"`, `SEPARATOR = "|"`, `ASSIGN = "="`
//! - **`HeadingMarker`**: the `=` runs framing a heading line
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in scanner code.
//! The scanners refer to these constants; they never hardcode `[[` or `{{`.

pub mod escape;
pub mod heading;
pub mod template;
pub mod wikilink;

pub use escape::{Comment, Nowiki};
pub use heading::HeadingMarker;
pub use template::TemplateCall;
pub use wikilink::WikiLink;
