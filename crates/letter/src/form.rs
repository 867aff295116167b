//! Form state holder

use crate::composer::compose_with_letterhead;
use crate::config::LetterConfig;
use crate::draft::{Draft, Field};
use crate::export::{export, Artifact, DocumentWriter};
use crate::{LetterError, Result};
use chrono::NaiveDate;

/// The state behind the application page: one draft plus the preview toggle
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    draft: Draft,
    preview_visible: bool,
    config: LetterConfig,
}

impl LoanForm {
    /// Empty form with the standard letterhead and layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty form with a custom configuration
    pub fn with_config(config: LetterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn config(&self) -> &LetterConfig {
        &self.config
    }

    /// Replace the whole draft
    pub fn load_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Merge one field value into the draft
    ///
    /// Unknown field names and unknown loan reasons are rejected and leave the
    /// draft unchanged.
    pub fn update(&mut self, field_name: &str, value: &str) -> Result<()> {
        let field: Field = field_name.parse()?;
        self.draft.set(field, value)
    }

    /// Current value of a field
    pub fn value(&self, field_name: &str) -> Result<&str> {
        let field: Field = field_name.parse()?;
        Ok(self.draft.get(field))
    }

    /// True when the preview and download actions are enabled
    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    /// Required fields still empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.draft.missing_fields()
    }

    /// Flip the preview toggle and return the new state
    ///
    /// Does nothing while the draft is invalid.
    pub fn toggle_preview(&mut self) -> bool {
        if self.is_valid() {
            self.preview_visible = !self.preview_visible;
        }
        self.preview_visible
    }

    /// Whether the preview toggle is on
    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// Caption for the preview button
    pub fn preview_label(&self) -> &'static str {
        if self.preview_visible {
            "Hide Preview"
        } else {
            "Preview Letter"
        }
    }

    /// Compose the letter for `date` regardless of the toggle
    pub fn compose(&self, date: NaiveDate) -> String {
        compose_with_letterhead(&self.draft, date, &self.config.letterhead)
    }

    /// Preview text, shown only while the toggle is on and the draft is valid
    pub fn preview(&self, date: NaiveDate) -> Option<String> {
        (self.preview_visible && self.is_valid()).then(|| self.compose(date))
    }

    /// Compose and export the letter
    ///
    /// Fails with [`LetterError::IncompleteDraft`] while required fields are
    /// empty. Writer errors propagate unchanged.
    pub fn download<W>(&self, date: NaiveDate, writer: &W) -> Result<Artifact>
    where
        W: DocumentWriter + ?Sized,
    {
        if !self.is_valid() {
            return Err(LetterError::IncompleteDraft(self.missing_fields()));
        }

        let text = self.compose(date);
        export(&text, &self.draft.eb_number, writer, &self.config.layout)
    }
}
