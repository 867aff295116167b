//! Integration tests for letter composition and PDF export

use chrono::NaiveDate;
use lopdf::Document;
use pdf_core::{encode_win_ansi, to_hex_string, StandardFont};
use pf_letter::{
    compose, export_file_name, Draft, LetterConfig, LoanForm, LoanReason, PageLayout,
    PdfDocumentWriter,
};
use pretty_assertions::assert_eq;

fn scenario_draft() -> Draft {
    Draft::from_json(
        r#"{
            "employeeName": "A Kumar",
            "ebNumber": "EB123",
            "departmentDesignation": "Production - Supervisor",
            "loanAmount": "100000",
            "loanReason": "Medical Treatment",
            "mobileNumber": "9876543210"
        }"#,
    )
    .unwrap()
}

fn scenario_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// All page content streams of a PDF, decompressed and concatenated
fn all_content(bytes: &[u8]) -> (usize, String) {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    let mut content = String::new();
    for page_id in pages.values() {
        let data = doc.get_page_content(*page_id).unwrap();
        content.push_str(&String::from_utf8(data).unwrap());
    }
    (pages.len(), content)
}

fn hex(text: &str) -> String {
    to_hex_string(&encode_win_ansi(text))
}

#[test]
fn test_scenario_letter() {
    let text = compose(&scenario_draft(), scenario_date());

    assert!(text.starts_with("Date: 15 January 2024\n"));
    assert!(text.contains("EB Number EB123"));
    assert!(text.contains("₹1,00,000"));
    assert!(text.contains("medical treatment"));
    assert!(text.contains("Purpose: Medical Treatment"));
    assert!(text.ends_with("EB No: EB123\nMobile: 9876543210"));
}

#[test]
fn test_compose_is_pure() {
    let draft = scenario_draft();
    assert_eq!(
        compose(&draft, scenario_date()),
        compose(&draft, scenario_date())
    );

    let other_day = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
    assert_ne!(
        compose(&draft, scenario_date()),
        compose(&draft, other_day)
    );
}

#[test]
fn test_every_reason_appears_twice() {
    for reason in LoanReason::ALL {
        let draft = Draft {
            loan_reason: reason,
            ..scenario_draft()
        };
        let text = compose(&draft, scenario_date());
        assert!(text.contains(&format!("for {}.", reason.label().to_lowercase())));
        assert!(text.contains(&format!("Purpose: {}", reason.label())));
    }
}

#[test]
fn test_file_names() {
    assert_eq!(export_file_name("EB123", "pdf"), "PF_Loan_Application_EB123.pdf");
    assert_eq!(export_file_name("", "pdf"), "PF_Loan_Application_draft.pdf");
}

#[test]
fn test_pdf_contains_letter_lines() {
    let mut form = LoanForm::new();
    form.load_draft(scenario_draft());

    let artifact = form
        .download(scenario_date(), &PdfDocumentWriter::default())
        .unwrap();
    let (pages, content) = all_content(&artifact.bytes);

    assert_eq!(pages, 1);
    assert!(content.contains("/F1 11 Tf"));
    assert!(content.contains(&hex("Date: 15 January 2024")));
    assert!(content.contains(&hex("Loan Amount Required: Rs.1,00,000")));
    assert!(content.contains(&hex("Mobile: 9876543210")));
}

#[test]
fn test_pdf_wraps_long_paragraphs_to_column() {
    let layout = PageLayout::default();
    let max_width = pdf_core::units::mm_to_pt(layout.wrap_width_mm);
    let text = compose(&scenario_draft(), scenario_date());

    let lines = pdf_core::word_wrap(&text, max_width, |s| {
        StandardFont::Helvetica.text_width_points(s, layout.font_size)
    });

    assert!(lines.len() > text.lines().count());
    for line in &lines {
        assert!(StandardFont::Helvetica.text_width_points(line, layout.font_size) <= max_width);
    }
}

#[test]
fn test_pdf_output_is_deterministic() {
    let mut form = LoanForm::new();
    form.load_draft(scenario_draft());
    let writer = PdfDocumentWriter::default();

    let first = form.download(scenario_date(), &writer).unwrap();
    let second = form.download(scenario_date(), &writer).unwrap();
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn test_long_department_spills_onto_second_page() {
    let draft = Draft {
        department_designation: "Spinning ".repeat(600),
        ..scenario_draft()
    };
    let mut form = LoanForm::new();
    form.load_draft(draft);

    let artifact = form
        .download(scenario_date(), &PdfDocumentWriter::default())
        .unwrap();
    let (pages, content) = all_content(&artifact.bytes);

    assert!(pages >= 2);
    assert!(content.contains(&hex("Mobile: 9876543210")));
}

#[test]
fn test_configured_layout_and_letterhead() {
    let config = LetterConfig::from_json(
        r#"{
            "letterhead": { "addressee": "The Personnel Manager" },
            "layout": { "paper": "letter", "font": "courier", "fontSize": 10 }
        }"#,
    )
    .unwrap();
    let mut form = LoanForm::with_config(config);
    form.load_draft(scenario_draft());

    let artifact = form
        .download(scenario_date(), &PdfDocumentWriter::default())
        .unwrap();
    let doc = Document::load_mem(&artifact.bytes).unwrap();
    let (_, content) = all_content(&artifact.bytes);

    assert!(content.contains("/F1 10 Tf"));
    assert!(content.contains(&hex("The Personnel Manager")));

    let page_id = doc.get_pages()[&1];
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let resources_id = page.get(b"Resources").unwrap().as_reference().unwrap();
    let resources = doc.get_object(resources_id).unwrap().as_dict().unwrap();
    let font_id = resources
        .get(b"Font")
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"F1")
        .unwrap()
        .as_reference()
        .unwrap();
    let font = doc.get_object(font_id).unwrap().as_dict().unwrap();
    assert_eq!(font.get(b"BaseFont").unwrap().as_name().unwrap(), b"Courier");
}
