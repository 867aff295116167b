//! Letter text composition

use crate::config::Letterhead;
use crate::draft::Draft;
use chrono::NaiveDate;
use en_in_text::{format_currency, format_long_date};

const ASSURANCE: &str = "I assure you that I will comply with all the necessary formalities \
and submit all required documents for the loan processing. I request you to kindly consider \
my application and grant the loan at the earliest.";

/// Compose the letter with the standard letterhead
pub fn compose(draft: &Draft, date: NaiveDate) -> String {
    compose_with_letterhead(draft, date, &Letterhead::default())
}

/// Compose the letter text for a draft
///
/// Output depends only on the arguments. Lines are separated by `\n` and
/// there is no trailing newline.
pub fn compose_with_letterhead(draft: &Draft, date: NaiveDate, letterhead: &Letterhead) -> String {
    let name = &draft.employee_name;
    let eb = &draft.eb_number;
    let dept = &draft.department_designation;
    let mobile = &draft.mobile_number;
    let amount = format_currency(&draft.loan_amount);
    let reason = draft.loan_reason.label();

    let mut lines: Vec<String> = vec![
        format!("Date: {}", format_long_date(date)),
        String::new(),
        "To,".to_string(),
        letterhead.addressee.clone(),
        letterhead.company.clone(),
    ];
    lines.extend(letterhead.address_lines.iter().cloned());

    lines.extend([
        String::new(),
        format!("Subject: {}", letterhead.subject),
        String::new(),
        "Respected Sir/Madam,".to_string(),
        String::new(),
        format!(
            "I, {name}, EB Number {eb}, working as {dept} in your esteemed organization, \
             would like to request for a non-refundable loan withdrawal from my Provident Fund account."
        ),
        String::new(),
        format!(
            "I kindly request you to approve a loan amount of {amount} for {}.",
            reason.to_lowercase()
        ),
        String::new(),
        ASSURANCE.to_string(),
        String::new(),
        "Employee Details:".to_string(),
        format!("Name: {name}"),
        format!("EB Number: {eb}"),
        format!("Department & Designation: {dept}"),
        format!("Loan Amount Required: {amount}"),
        format!("Purpose: {reason}"),
        format!("Mobile Number: {mobile}"),
        String::new(),
        "Thanking you in anticipation.".to_string(),
        String::new(),
        "Yours faithfully,".to_string(),
        String::new(),
        name.clone(),
        format!("EB No: {eb}"),
        format!("Mobile: {mobile}"),
    ]);

    log::debug!("composed letter for EB number {eb:?}");
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::LoanReason;
    use pretty_assertions::assert_eq;

    fn sample_draft() -> Draft {
        Draft {
            employee_name: "A Kumar".into(),
            eb_number: "EB123".into(),
            department_designation: "Production - Supervisor".into(),
            loan_amount: "100000".into(),
            loan_reason: LoanReason::MedicalTreatment,
            mobile_number: "9876543210".into(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_compose_full_text() {
        let expected = "Date: 15 January 2024

To,
The Labour Officer
Anglo India Jute & Textile Industries Pvt. Ltd.
West Ghoshpara Road, Jagaddal,
North 24 Parganas

Subject: Request for Non-Refundable Loan Withdrawal against PF

Respected Sir/Madam,

I, A Kumar, EB Number EB123, working as Production - Supervisor in your esteemed organization, would like to request for a non-refundable loan withdrawal from my Provident Fund account.

I kindly request you to approve a loan amount of ₹1,00,000 for medical treatment.

I assure you that I will comply with all the necessary formalities and submit all required documents for the loan processing. I request you to kindly consider my application and grant the loan at the earliest.

Employee Details:
Name: A Kumar
EB Number: EB123
Department & Designation: Production - Supervisor
Loan Amount Required: ₹1,00,000
Purpose: Medical Treatment
Mobile Number: 9876543210

Thanking you in anticipation.

Yours faithfully,

A Kumar
EB No: EB123
Mobile: 9876543210";

        assert_eq!(compose(&sample_draft(), date()), expected);
    }

    #[test]
    fn test_reason_lower_cased_only_in_sentence() {
        let draft = Draft {
            loan_reason: LoanReason::DaughtersMarriageExpenses,
            ..sample_draft()
        };
        let text = compose(&draft, date());

        assert!(text.contains("for daughter's marriage expenses."));
        assert!(text.contains("Purpose: Daughter's Marriage Expenses"));
    }

    #[test]
    fn test_custom_letterhead() {
        let letterhead = Letterhead {
            addressee: "The Personnel Manager".into(),
            company: "Example Mills Ltd.".into(),
            address_lines: vec!["1 Mill Road".into()],
            subject: "PF Advance".into(),
        };
        let text = compose_with_letterhead(&sample_draft(), date(), &letterhead);

        assert!(text.contains("To,\nThe Personnel Manager\nExample Mills Ltd.\n1 Mill Road\n\nSubject: PF Advance"));
    }

    #[test]
    fn test_malformed_amount_does_not_fail() {
        let draft = Draft {
            loan_amount: "one lakh".into(),
            ..sample_draft()
        };
        let text = compose(&draft, date());
        assert!(text.contains("Loan Amount Required: ₹NaN"));
    }

    #[test]
    fn test_empty_amount_renders_empty() {
        let draft = Draft {
            loan_amount: String::new(),
            ..sample_draft()
        };
        let text = compose(&draft, date());
        assert!(text.contains("approve a loan amount of  for medical treatment."));
    }
}
