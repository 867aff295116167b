//! PDF Core - Minimal PDF writer for generated letters
//!
//! This crate provides functionality for:
//! - Creating blank A4/Letter documents
//! - Placing text with the built-in Type1 fonts (Helvetica, Courier)
//! - Measuring and word-wrapping text by rendered width
//! - Flowing lines across pages
//! - Saving with compressed content streams
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{PageSize, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::new(PageSize::A4);
//! doc.set_font(StandardFont::Helvetica, 11.0);
//! doc.insert_text("Hello, World!", 1, 42.5, 42.5)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod text;

pub use document::{PageSize, PdfDocument};
pub use font::{encode_win_ansi, StandardFont};
pub use text::{generate_text_operators, to_hex_string, word_wrap, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("No font set")]
    FontNotSet,

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Unit conversion helpers
pub mod units {
    /// Points per millimetre
    pub const PT_PER_MM: f64 = 72.0 / 25.4;

    /// Convert millimetres to points
    pub fn mm_to_pt(mm: f64) -> f64 {
        mm * PT_PER_MM
    }
}
