use crate::consts::MAX_PROCESSED_TEXT_BYTES;
use crate::errors::ShowReviewError;
use crate::models::text::Capitalization;

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

impl Capitalization {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Capitalization::Upper => text.to_uppercase(),
            Capitalization::Lower => text.to_lowercase(),
            Capitalization::None => text.to_string(),
        }
    }
}

/// Capitalizes `text` and repeats the result `duplication_factor` times.
pub fn process_text(
    text: &str,
    duplication_factor: usize,
    capitalization: Capitalization,
) -> Result<String, ShowReviewError> {
    let text = capitalization.apply(text);

    match text.len().checked_mul(duplication_factor) {
        Some(len) if len <= MAX_PROCESSED_TEXT_BYTES => Ok(text.repeat(duplication_factor)),
        _ => Err(ShowReviewError::ValidationError(format!(
            "Processed text would exceed {} bytes.",
            MAX_PROCESSED_TEXT_BYTES
        ))),
    }
}
