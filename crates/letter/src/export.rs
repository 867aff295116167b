//! Document export

use crate::config::PageLayout;
use crate::Result;
use pdf_core::units::mm_to_pt;
use pdf_core::{word_wrap, PdfDocument, StandardFont};

/// Turns composed letter text into a downloadable document
pub trait DocumentWriter {
    /// MIME type of the produced bytes
    fn mime_type(&self) -> &'static str;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    /// Lay out `text` on pages and return the encoded document
    fn write(&self, text: &str, layout: &PageLayout) -> Result<Vec<u8>>;
}

/// A finished export, ready to be saved or offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Download name for an application, keyed by EB number
///
/// # Examples
/// ```
/// use pf_letter::export_file_name;
/// assert_eq!(export_file_name("EB123", "pdf"), "PF_Loan_Application_EB123.pdf");
/// assert_eq!(export_file_name("", "pdf"), "PF_Loan_Application_draft.pdf");
/// ```
pub fn export_file_name(eb_number: &str, extension: &str) -> String {
    let key = if eb_number.is_empty() {
        "draft"
    } else {
        eb_number
    };
    format!("PF_Loan_Application_{key}.{extension}")
}

/// Render `text` with `writer` and name the result after the EB number
///
/// Writer failures are returned as-is; nothing is retried.
pub fn export<W>(text: &str, eb_number: &str, writer: &W, layout: &PageLayout) -> Result<Artifact>
where
    W: DocumentWriter + ?Sized,
{
    let bytes = writer.write(text, layout)?;
    let file_name = export_file_name(eb_number, writer.extension());

    log::debug!("exported {} ({} bytes)", file_name, bytes.len());

    Ok(Artifact {
        file_name,
        mime_type: writer.mime_type(),
        bytes,
    })
}

/// PDF output through `pdf-core`
#[derive(Debug, Clone)]
pub struct PdfDocumentWriter {
    /// Title stored in the document information dictionary
    pub title: String,
}

impl Default for PdfDocumentWriter {
    fn default() -> Self {
        Self {
            title: "PF Loan Application".to_string(),
        }
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn write(&self, text: &str, layout: &PageLayout) -> Result<Vec<u8>> {
        let font: StandardFont = layout.font.into();
        let size = layout.font_size;

        let mut doc = PdfDocument::new(layout.paper.into());
        doc.set_title(&self.title);
        doc.set_font(font, size);

        let lines = word_wrap(text, mm_to_pt(layout.wrap_width_mm), |s| {
            font.text_width_points(s, size)
        });

        let margin_top = mm_to_pt(layout.margin_top_mm);
        doc.insert_lines(
            &lines,
            1,
            mm_to_pt(layout.margin_left_mm),
            margin_top,
            layout.line_height(),
            margin_top,
        )?;

        Ok(doc.to_bytes()?)
    }
}
