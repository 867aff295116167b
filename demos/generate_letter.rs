//! PF Loan Letter Generator
//!
//! Renders a loan application letter from a draft JSON file.
//!
//! Usage:
//!   cargo run -p pf-letter --example generate_letter -- <draft.json> [--config config.json] [--date YYYY-MM-DD] [--out DIR] [--preview]
//!
//! Example:
//!   RUST_LOG=debug cargo run -p pf-letter --example generate_letter -- demos/draft.json --date 2024-01-15

use chrono::Local;
use pf_letter::{Draft, LetterConfig, LoanForm, PdfDocumentWriter};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <draft.json> [--config config.json] [--date YYYY-MM-DD] [--out DIR] [--preview]",
            args[0]
        );
        std::process::exit(1);
    }

    let mut config_path = None;
    let mut date = None;
    let mut out_dir = PathBuf::from("output");
    let mut preview = false;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => config_path = rest.next().cloned(),
            "--date" => date = rest.next().map(|d| en_in_text::parse_iso_date(d)).transpose()?,
            "--out" => out_dir = rest.next().map(PathBuf::from).unwrap_or(out_dir),
            "--preview" => preview = true,
            other => return Err(format!("Unknown argument: {other}").into()),
        }
    }

    let config = match config_path {
        Some(path) => LetterConfig::from_json(&std::fs::read_to_string(&path)?)?,
        None => LetterConfig::default(),
    };
    let draft = Draft::from_json(&std::fs::read_to_string(&args[1])?)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let mut form = LoanForm::with_config(config);
    form.load_draft(draft);

    if !form.is_valid() {
        return Err(format!("Missing required fields: {}", form.missing_fields().join(", ")).into());
    }

    if preview {
        form.toggle_preview();
        if let Some(text) = form.preview(date) {
            println!("{text}\n");
        }
    }

    let artifact = form.download(date, &PdfDocumentWriter::default())?;

    std::fs::create_dir_all(&out_dir)?;
    let output_path = out_dir.join(&artifact.file_name);
    std::fs::write(&output_path, &artifact.bytes)?;

    println!("Generated: {}", output_path.display());

    Ok(())
}
