//! Configuration constants and validation functions.

use crate::error::{ReviewError, Result};

/// Key holding the clause title in analysis output.
pub const CLAUSE_TITLE_KEY: &str = "Klausa";

/// Key holding the clause body text in analysis output.
pub const CLAUSE_BODY_KEY: &str = "Isi";

/// Separator placed between an item number and its text.
///
/// Three spaces give list items a fixed-width visual indent.
pub const ITEM_INDENT: &str = "   ";

/// Document rendered by the result page when no path is given.
pub const DEFAULT_DOCUMENT_PATH: &str = "static/clauses_risks.json";

/// Site title used for Open Graph tags.
pub const OG_TITLE: &str = "AI Contract Review & Legal Assistant";

/// Site description used for Open Graph tags.
pub const OG_DESCRIPTION: &str = "AI-powered contract review and legal assistant that helps you analyze, understand, and manage legal documents quickly and securely.";

/// Number of description characters carried into the OG image URL.
pub const OG_DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Path of the OG image endpoint, relative to the site origin.
pub const OG_IMAGE_PATH: &str = "/api/og";

/// Title drawn on the OG image when the request has none.
pub const OG_IMAGE_DEFAULT_TITLE: &str = "AI Contract Review";

/// Description drawn on the OG image when the request has none.
pub const OG_IMAGE_DEFAULT_DESCRIPTION: &str = "Analyze legal documents with AI";

/// Text wrap width for terminal output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Clause categories the analysis backend extracts from every contract.
pub const STANDARD_CLAUSES: [&str; 10] = [
    "Jangka Waktu",
    "Pembayaran",
    "Pengakhiran",
    "Kerahasiaan",
    "Ganti Rugi",
    "Force Majeure",
    "Hukum yang Berlaku",
    "Penyelesaian Sengketa",
    "Jaminan",
    "Pembatasan Tanggung Jawab",
];

/// Risk questions the analysis backend asks about every contract.
///
/// The questions become the keys of the `risks` mapping.
pub const RISK_QUESTIONS: [&str; 5] = [
    "Adakah klausa yang ambigu atau tidak jelas dalam kontrak ini?",
    "Identifikasi risiko finansial dalam kontrak ini",
    "Apakah ada kewajiban one-sided yang memberatkan salah satu pihak?",
    "Temukan klausa yang mungkin sulit untuk dipatuhi atau diimplementasikan",
    "Apakah ada masalah hukum potensial dalam kontrak ini?",
];

/// Normalize and validate a user ID.
///
/// Surrounding whitespace and double quotes are stripped, since IDs often
/// arrive from headers or copied JSON.
///
/// # Returns
/// * `Ok(id)` with the cleaned ID
/// * `Err(ReviewError::MissingUserId)` if nothing remains
///
/// # Examples
/// ```
/// use contract_review::config::validate_user_id;
///
/// assert_eq!(validate_user_id("\"abc-123\"").unwrap(), "abc-123");
/// assert!(validate_user_id("  ").is_err());
/// ```
pub fn validate_user_id(user_id: &str) -> Result<&str> {
    let cleaned = user_id.trim().trim_matches('"').trim();
    if cleaned.is_empty() {
        Err(ReviewError::MissingUserId)
    } else {
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_id_valid() {
        assert_eq!(validate_user_id("abc").ok(), Some("abc"));
        assert_eq!(validate_user_id(" abc ").ok(), Some("abc"));
        assert_eq!(validate_user_id("\"abc\"").ok(), Some("abc"));
    }

    #[test]
    fn test_validate_user_id_invalid() {
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("\"\"").is_err());
        assert!(validate_user_id(" \" \" ").is_err());
    }

    #[test]
    fn test_item_indent_is_three_spaces() {
        assert_eq!(ITEM_INDENT.len(), 3);
        assert!(ITEM_INDENT.chars().all(|c| c == ' '));
    }

    #[test]
    fn test_og_description_is_longer_than_preview() {
        assert!(OG_DESCRIPTION.chars().count() > OG_DESCRIPTION_PREVIEW_CHARS);
    }
}
