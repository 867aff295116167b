//! PDF Document builder

use crate::font::{encode_win_ansi, StandardFont};
use crate::text::{generate_text_operators, to_hex_string, TextRenderContext};
use crate::{PdfError, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Page dimensions in points (portrait)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// ISO A4, 210 x 297 mm
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };

    /// US Letter, 8.5 x 11 in
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// A PDF document under construction
///
/// Pages are kept as raw content buffers and the lopdf object graph is only
/// built when the document is serialized, so the same document always
/// produces the same bytes.
pub struct PdfDocument {
    /// Size shared by every page
    page_size: PageSize,
    /// Content operators per page (index 0 is page 1)
    pages: Vec<Vec<u8>>,
    /// Fonts referenced so far (font -> resource name)
    font_resources: BTreeMap<StandardFont, String>,
    /// Current font
    current_font: Option<StandardFont>,
    /// Current font size
    current_font_size: f32,
    /// Document title written to the Info dictionary
    title: Option<String>,
    /// Whether content streams are Flate-compressed
    compress: bool,
}

impl PdfDocument {
    /// Create a document with one blank page
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            pages: vec![Vec::new()],
            font_resources: BTreeMap::new(),
            current_font: None,
            current_font_size: 12.0,
            title: None,
            compress: true,
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page dimensions in points
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Add a blank page and return its number (1-indexed)
    pub fn add_blank_page(&mut self) -> usize {
        self.pages.push(Vec::new());
        self.pages.len()
    }

    /// Set the current font and size
    pub fn set_font(&mut self, font: StandardFont, size: f32) {
        self.current_font = Some(font);
        self.current_font_size = size;
    }

    /// Set the document title (Info dictionary)
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Enable or disable Flate compression of page content
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from top)
    pub fn insert_text(&mut self, text: &str, page: usize, x: f64, y: f64) -> Result<()> {
        self.check_page(page)?;

        // Blank lines only advance the baseline
        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font.ok_or(PdfError::FontNotSet)?;

        // Register font in page resources
        let ctx = TextRenderContext {
            font_name: self.font_resource(font),
            font_size: self.current_font_size,
        };

        // Built-in fonts take single-byte WinAnsi codes
        let text_hex = to_hex_string(&encode_win_ansi(text));

        // Convert Y coordinate from top-origin to PDF bottom-origin
        let pdf_y = self.page_size.height - y;
        let operators = generate_text_operators(&text_hex, x, pdf_y, &ctx);

        self.pages[page - 1].extend_from_slice(&operators);
        Ok(())
    }

    /// Insert lines top to bottom, continuing on new pages when needed
    ///
    /// The first baseline is at `y`. A line whose baseline would fall below
    /// `page height - bottom_margin` moves to a fresh page, restarting at `y`.
    ///
    /// # Returns
    /// The page number the last line was written to
    pub fn insert_lines(
        &mut self,
        lines: &[String],
        page: usize,
        x: f64,
        y: f64,
        line_height: f64,
        bottom_margin: f64,
    ) -> Result<usize> {
        self.check_page(page)?;

        let limit = self.page_size.height - bottom_margin;
        let mut page = page;
        let mut baseline = y;
        let mut lines_on_page = 0usize;

        for line in lines {
            // At least one line per page, so tiny pages still make progress
            if lines_on_page > 0 && baseline > limit {
                page = if page < self.page_count() {
                    page + 1
                } else {
                    self.add_blank_page()
                };
                baseline = y;
                lines_on_page = 0;
            }

            self.insert_text(line, page, x, baseline)?;
            baseline += line_height;
            lines_on_page += 1;
        }

        Ok(page)
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.build()?;

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        log::debug!(
            "saved PDF: {} page(s), {} bytes",
            self.pages.len(),
            buffer.len()
        );
        Ok(buffer)
    }

    /// Build the lopdf object graph
    fn build(&self) -> Result<Document> {
        let mut doc = Document::with_version("1.4");
        // Reserve the Pages id so each page can point back at its parent
        let pages_id = doc.new_object_id();

        // One Resources dictionary shared by every page
        let mut font_dict = Dictionary::new();
        for (font, resource_name) in &self.font_resources {
            let font_id = doc.add_object(font.to_pdf_dictionary());
            font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        // Page objects, in order
        let mut kids = Vec::with_capacity(self.pages.len());
        for content in &self.pages {
            let content_id = doc.add_object(self.content_stream(content)?);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        // MediaBox is inherited by all kids
        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    self.page_size.width.into(),
                    self.page_size.height.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        // No CreationDate, so equal input gives equal bytes
        let mut info = dictionary! {
            "Producer" => Object::string_literal(concat!("pdf-core ", env!("CARGO_PKG_VERSION"))),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(title.as_bytes().to_vec()));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);

        Ok(doc)
    }

    /// Wrap page operators in a (possibly compressed) stream
    fn content_stream(&self, content: &[u8]) -> Result<Stream> {
        if !self.compress {
            return Ok(Stream::new(Dictionary::new(), content.to_vec()));
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content)?;
        let compressed = encoder.finish()?;

        Ok(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            compressed,
        ))
    }

    /// Get or create the resource name (e.g., "F1") for a font
    fn font_resource(&mut self, font: StandardFont) -> String {
        let next = self.font_resources.len() + 1;
        self.font_resources
            .entry(font)
            .or_insert_with(|| format!("F{next}"))
            .clone()
    }

    fn check_page(&self, page: usize) -> Result<()> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }
        Ok(())
    }
}
