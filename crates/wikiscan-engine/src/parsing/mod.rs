//! # Wikitext Scanning
//!
//! Every scanner here works on plain `&str` input and is linear in its length.
//! Escape spans (comments and `<nowiki>`) are stripped before anything else is
//! looked at, so markup inside them is never seen.
//!
//! ## Modules
//!
//! - **`kinds`**: the literal delimiters of each construct
//! - **`scan`**: marker search and depth-balanced span matching
//! - **`escape`**: [`strip_escapes`]
//! - **`headings`**, **`sections`**: heading lines and the sections they open
//! - **`links`**: `[[target|text]]`
//! - **`templates`**: `{{name|args}}` parsing, rewriting and serialization
//! - **`tokens`**: one lazy document-order stream of all of the above

pub mod escape;
pub mod headings;
pub mod kinds;
pub mod links;
pub mod scan;
pub mod sections;
pub mod templates;
pub mod tokens;

pub use escape::strip_escapes;

#[cfg(test)]
mod tests;
