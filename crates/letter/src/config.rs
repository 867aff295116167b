//! Letterhead and page layout configuration

use crate::{LetterError, Result};
use pdf_core::{PageSize, StandardFont};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LetterConfig {
    /// Addressee block and subject
    pub letterhead: Letterhead,

    /// Page geometry for export
    pub layout: PageLayout,
}

impl LetterConfig {
    /// Parse configuration from JSON; omitted keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LetterError::ConfigError(e.to_string()))
    }
}

/// Fixed addressee and subject printed on every letter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Letterhead {
    /// Recipient title (e.g., "The Labour Officer")
    pub addressee: String,

    /// Company name
    pub company: String,

    /// Postal address, one entry per printed line
    pub address_lines: Vec<String>,

    /// Subject line text (without the "Subject:" prefix)
    pub subject: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            addressee: "The Labour Officer".to_string(),
            company: "Anglo India Jute & Textile Industries Pvt. Ltd.".to_string(),
            address_lines: vec![
                "West Ghoshpara Road, Jagaddal,".to_string(),
                "North 24 Parganas".to_string(),
            ],
            subject: "Request for Non-Refundable Loan Withdrawal against PF".to_string(),
        }
    }
}

impl Letterhead {
    /// The fixed details shown above the form
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("To: {}", self.addressee),
            format!("Company: {}", self.company),
            format!("Address: {}", self.address_lines.join(" ")),
            format!("Subject: {}", self.subject),
        ]
    }
}

/// Paper size
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl From<PaperSize> for PageSize {
    fn from(size: PaperSize) -> Self {
        match size {
            PaperSize::A4 => PageSize::A4,
            PaperSize::Letter => PageSize::LETTER,
        }
    }
}

/// Built-in font used for the exported letter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LetterFont {
    #[default]
    Helvetica,
    Courier,
}

impl From<LetterFont> for StandardFont {
    fn from(font: LetterFont) -> Self {
        match font {
            LetterFont::Helvetica => StandardFont::Helvetica,
            LetterFont::Courier => StandardFont::Courier,
        }
    }
}

/// Where and how the letter text is placed on the page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageLayout {
    pub paper: PaperSize,

    pub font: LetterFont,

    /// Font size in points
    pub font_size: f32,

    /// Left edge of the text column
    pub margin_left_mm: f64,

    /// First baseline from the top edge; also used as the bottom margin
    pub margin_top_mm: f64,

    /// Column width text is wrapped to
    pub wrap_width_mm: f64,

    /// Line advance as a multiple of the font size
    pub line_height_factor: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            font: LetterFont::Helvetica,
            font_size: 11.0,
            margin_left_mm: 15.0,
            margin_top_mm: 15.0,
            wrap_width_mm: 180.0,
            line_height_factor: 1.15,
        }
    }
}

impl PageLayout {
    /// Line advance in points
    pub fn line_height(&self) -> f64 {
        f64::from(self.font_size) * self.line_height_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = LetterConfig::from_json("{}").unwrap();
        assert_eq!(config, LetterConfig::default());
        assert_eq!(config.layout.font_size, 11.0);
        assert_eq!(config.letterhead.addressee, "The Labour Officer");
    }

    #[test]
    fn test_partial_override() {
        let config = LetterConfig::from_json(
            r#"{
                "letterhead": { "addressee": "The Personnel Manager" },
                "layout": { "paper": "letter", "font": "courier", "fontSize": 10 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.letterhead.addressee, "The Personnel Manager");
        assert_eq!(
            config.letterhead.company,
            "Anglo India Jute & Textile Industries Pvt. Ltd."
        );
        assert_eq!(config.layout.paper, PaperSize::Letter);
        assert_eq!(config.layout.font, LetterFont::Courier);
        assert_eq!(config.layout.font_size, 10.0);
        assert_eq!(config.layout.wrap_width_mm, 180.0);
    }

    #[test]
    fn test_invalid_json() {
        let result = LetterConfig::from_json(r#"{ "layout": { "paper": "a3" } }"#);
        assert!(matches!(result, Err(LetterError::ConfigError(_))));
    }

    #[test]
    fn test_summary_lines() {
        let lines = Letterhead::default().summary_lines();
        assert_eq!(
            lines,
            vec![
                "To: The Labour Officer",
                "Company: Anglo India Jute & Textile Industries Pvt. Ltd.",
                "Address: West Ghoshpara Road, Jagaddal, North 24 Parganas",
                "Subject: Request for Non-Refundable Loan Withdrawal against PF",
            ]
        );
    }

    #[test]
    fn test_line_height() {
        let layout = PageLayout::default();
        assert!((layout.line_height() - 12.65).abs() < 1e-6);
    }
}
