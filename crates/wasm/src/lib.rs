//! WASM bindings for the PF loan application page
//!
//! This crate provides a JavaScript-friendly API for:
//! - Holding the form state and checking validity
//! - Toggling and rendering the letter preview
//! - Producing the PDF and triggering the browser download
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { LoanForm, loanReasons, formatCurrency } from 'pf-loan-wasm';
//!
//! await init();
//!
//! const form = new LoanForm();
//! form.update('employeeName', 'A Kumar');
//! form.update('ebNumber', 'EB123');
//! // ...
//! if (form.isValid()) {
//!   form.togglePreview();
//!   preview.textContent = form.previewText() ?? '';
//!   form.downloadPdf();
//! }
//! ```

mod logger;

use chrono::NaiveDate;
use log::LevelFilter;
use pf_letter::{
    DocumentWriter, Draft, LetterConfig, Letterhead, LoanReason, PdfDocumentWriter,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub use logger::ConsoleLogger;

// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    ConsoleLogger::init(LevelFilter::Info);
}

/// Change the console log level ("error", "warn", "info", "debug", "trace", "off")
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown log level: {level}")))?;
    ConsoleLogger::init(filter);
    Ok(())
}

/// Render an amount string as rupees
///
/// @param amount - Amount as typed (e.g., "100000")
/// @returns Formatted amount (e.g., "₹1,00,000"), or "" for an empty amount
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: &str) -> String {
    en_in_text::format_currency(amount)
}

/// Loan reasons offered by the selector, in display order
///
/// @returns Array of labels
#[wasm_bindgen(js_name = loanReasons)]
pub fn loan_reasons() -> Vec<JsValue> {
    LoanReason::ALL
        .iter()
        .map(|reason| JsValue::from_str(reason.label()))
        .collect()
}

/// Addressee, company, address and subject lines of the standard letterhead
#[wasm_bindgen(js_name = fixedInformation)]
pub fn fixed_information() -> Vec<JsValue> {
    Letterhead::default()
        .summary_lines()
        .iter()
        .map(|line| JsValue::from_str(line))
        .collect()
}

/// Application form state
#[wasm_bindgen]
pub struct LoanForm {
    inner: pf_letter::LoanForm,
    writer: PdfDocumentWriter,
}

#[wasm_bindgen]
impl LoanForm {
    /// Create an empty form with the standard letterhead
    #[wasm_bindgen(constructor)]
    pub fn new() -> LoanForm {
        LoanForm {
            inner: pf_letter::LoanForm::new(),
            writer: PdfDocumentWriter::default(),
        }
    }

    /// Create an empty form from a configuration JSON string
    ///
    /// @param json - `{ "letterhead": {...}, "layout": {...} }`, any key optional
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<LoanForm, JsValue> {
        let config = LetterConfig::from_json(json).map_err(to_js_error)?;
        Ok(LoanForm {
            inner: pf_letter::LoanForm::with_config(config),
            writer: PdfDocumentWriter::default(),
        })
    }

    /// Set one field
    ///
    /// @param name - Field name (e.g., "employeeName", "loanReason")
    /// @param value - New value
    pub fn update(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.inner.update(name, value).map_err(to_js_error)
    }

    /// Current value of one field
    pub fn value(&self, name: &str) -> Result<String, JsValue> {
        self.inner
            .value(name)
            .map(str::to_string)
            .map_err(to_js_error)
    }

    /// Replace all fields from a plain object
    ///
    /// @param draft - `{ employeeName, ebNumber, ... }`; missing keys become empty
    #[wasm_bindgen(js_name = loadDraft)]
    pub fn load_draft(&mut self, draft: JsValue) -> Result<(), JsValue> {
        let draft: Draft = serde_wasm_bindgen::from_value(draft)?;
        self.inner.load_draft(draft);
        Ok(())
    }

    /// Current fields as a plain object
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.draft())?)
    }

    /// True when preview and download are enabled
    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Names of required fields that are still empty
    #[wasm_bindgen(js_name = missingFields)]
    pub fn missing_fields(&self) -> Vec<JsValue> {
        self.inner
            .missing_fields()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Letterhead lines of this form's configuration
    #[wasm_bindgen(js_name = fixedInformation)]
    pub fn fixed_information(&self) -> Vec<JsValue> {
        self.inner
            .config()
            .letterhead
            .summary_lines()
            .iter()
            .map(|line| JsValue::from_str(line))
            .collect()
    }

    /// Company name for the page header and footer
    #[wasm_bindgen(getter)]
    pub fn company(&self) -> String {
        self.inner.config().letterhead.company.clone()
    }

    /// Flip the preview toggle (ignored while invalid)
    ///
    /// @returns Whether the preview is now visible
    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&mut self) -> bool {
        self.inner.toggle_preview()
    }

    #[wasm_bindgen(getter, js_name = previewVisible)]
    pub fn preview_visible(&self) -> bool {
        self.inner.preview_visible()
    }

    /// "Preview Letter" or "Hide Preview"
    #[wasm_bindgen(getter, js_name = previewLabel)]
    pub fn preview_label(&self) -> String {
        self.inner.preview_label().to_string()
    }

    /// Letter text dated today, or undefined when the preview is hidden
    #[wasm_bindgen(js_name = previewText)]
    pub fn preview_text(&self) -> Result<Option<String>, JsValue> {
        Ok(self.inner.preview(today()?))
    }

    /// Letter text for a given date, ignoring the toggle
    ///
    /// @param year - Gregorian year
    /// @param month - Month (1-12)
    /// @param day - Day of month
    #[wasm_bindgen(js_name = composeOn)]
    pub fn compose_on(&self, year: i32, month: u32, day: u32) -> Result<String, JsValue> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid date: {year}-{month}-{day}")))?;
        Ok(self.inner.compose(date))
    }

    /// Download file name for the current EB number
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self) -> String {
        pf_letter::export_file_name(&self.inner.draft().eb_number, self.writer.extension())
    }

    /// PDF bytes of the letter dated today
    ///
    /// @returns PDF bytes (Uint8Array)
    #[wasm_bindgen(js_name = pdfBytes)]
    pub fn pdf_bytes(&self) -> Result<Vec<u8>, JsValue> {
        let artifact = self
            .inner
            .download(today()?, &self.writer)
            .map_err(to_js_error)?;
        Ok(artifact.bytes)
    }

    /// Build the PDF and save it through the browser
    #[wasm_bindgen(js_name = downloadPdf)]
    pub fn download_pdf(&self) -> Result<(), JsValue> {
        let artifact = self
            .inner
            .download(today()?, &self.writer)
            .map_err(to_js_error)?;

        log::info!("downloading {}", artifact.file_name);
        trigger_download(&artifact.file_name, artifact.mime_type, &artifact.bytes)
    }
}

impl Default for LoanForm {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(e: pf_letter::LetterError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Today's date in the browser's local time zone
fn today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("Invalid system date"))
}

/// Offer bytes as a file download via an object URL
fn trigger_download(file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}
