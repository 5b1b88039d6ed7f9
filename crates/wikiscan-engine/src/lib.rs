pub mod diagnostics;
pub mod error;
pub mod models;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::WikitextError;
pub use models::Page;
pub use options::{ScanOptions, TemplateOrder};
pub use parsing::{
    headings::{Heading, MAXIMUM_HEADING_LEVEL, parse_heading},
    links::{InternalLink, find_internal_links, parse_internal_link, remove_links},
    sections::{
        Section, contains_heading, contains_heading_under, get_section_text, iterate_headings,
        iterate_sections,
    },
    strip_escapes,
    templates::{
        ArgKey, Replacement, Template, TemplateArgs, find_templates, find_templates_by_name,
        make_template, parse_template, positional_args, replace_templates, replace_templates_if,
        shift_args,
    },
    tokens::{Token, Tokens, tokenize},
};
