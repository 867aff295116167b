//! PF Letter - Loan application form and letter generation
//!
//! This crate provides:
//! - The application draft and its closed set of loan reasons
//! - A form state holder with validity gating and a preview toggle
//! - The letter composer (pure function of draft and date)
//! - Export through a pluggable document writer, with a PDF implementation
//! - JSON configuration for the letterhead and page layout
//!
//! # Example
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use pf_letter::{LoanForm, PdfDocumentWriter};
//!
//! let mut form = LoanForm::new();
//! form.update("employeeName", "A Kumar")?;
//! form.update("ebNumber", "EB123")?;
//! form.update("departmentDesignation", "Production - Supervisor")?;
//! form.update("loanAmount", "100000")?;
//! form.update("mobileNumber", "9876543210")?;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let artifact = form.download(today, &PdfDocumentWriter::default())?;
//! std::fs::write(&artifact.file_name, &artifact.bytes)?;
//! ```

mod composer;
mod config;
mod draft;
mod export;
mod form;

pub use composer::{compose, compose_with_letterhead};
pub use config::{LetterConfig, LetterFont, Letterhead, PageLayout, PaperSize};
pub use draft::{Draft, Field, LoanReason};
pub use export::{export, export_file_name, Artifact, DocumentWriter, PdfDocumentWriter};
pub use form::LoanForm;

use thiserror::Error;

/// Errors that can occur while editing or exporting an application
#[derive(Debug, Error)]
pub enum LetterError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown loan reason: {0}")]
    UnknownLoanReason(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    IncompleteDraft(Vec<&'static str>),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Document writer failed: {0}")]
    WriterError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for letter operations
pub type Result<T> = std::result::Result<T, LetterError>;
