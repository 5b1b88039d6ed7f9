use crate::parsing::headings::MAXIMUM_HEADING_LEVEL;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WikitextError {
    #[error("Invalid heading level {level}: expected 1 to 6")]
    InvalidLevel { level: u8 },
    #[error("Heading ({level}, {heading:?}) was not found")]
    HeadingNotFound { level: u8, heading: String },
}

impl WikitextError {
    /// Rejects heading levels outside `1..=MAXIMUM_HEADING_LEVEL`.
    pub fn check_level(level: u8) -> Result<u8, WikitextError> {
        if (1..=MAXIMUM_HEADING_LEVEL).contains(&level) {
            Ok(level)
        } else {
            Err(WikitextError::InvalidLevel { level })
        }
    }
}
