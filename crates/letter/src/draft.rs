//! Application draft and its field vocabulary

use crate::{LetterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Purpose of the loan
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LoanReason {
    #[default]
    #[serde(rename = "House Construction")]
    HouseConstruction,
    #[serde(rename = "Medical Treatment")]
    MedicalTreatment,
    #[serde(rename = "Children's Education")]
    ChildrensEducation,
    #[serde(rename = "Daughter's Marriage Expenses")]
    DaughtersMarriageExpenses,
    #[serde(rename = "Other")]
    Other,
}

impl LoanReason {
    /// Every reason, in the order the form offers them
    pub const ALL: [LoanReason; 5] = [
        LoanReason::HouseConstruction,
        LoanReason::MedicalTreatment,
        LoanReason::ChildrensEducation,
        LoanReason::DaughtersMarriageExpenses,
        LoanReason::Other,
    ];

    /// Display label, also the value submitted by the selector
    pub fn label(&self) -> &'static str {
        match self {
            LoanReason::HouseConstruction => "House Construction",
            LoanReason::MedicalTreatment => "Medical Treatment",
            LoanReason::ChildrensEducation => "Children's Education",
            LoanReason::DaughtersMarriageExpenses => "Daughter's Marriage Expenses",
            LoanReason::Other => "Other",
        }
    }
}

impl fmt::Display for LoanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LoanReason {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self> {
        LoanReason::ALL
            .into_iter()
            .find(|reason| reason.label() == s)
            .ok_or_else(|| LetterError::UnknownLoanReason(s.to_string()))
    }
}

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EmployeeName,
    EbNumber,
    DepartmentDesignation,
    LoanAmount,
    LoanReason,
    MobileNumber,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 6] = [
        Field::EmployeeName,
        Field::EbNumber,
        Field::DepartmentDesignation,
        Field::LoanAmount,
        Field::LoanReason,
        Field::MobileNumber,
    ];

    /// Fields that must be non-empty before preview or download
    pub const REQUIRED: [Field; 5] = [
        Field::EmployeeName,
        Field::EbNumber,
        Field::DepartmentDesignation,
        Field::LoanAmount,
        Field::MobileNumber,
    ];

    /// Input name used by the form
    pub fn name(&self) -> &'static str {
        match self {
            Field::EmployeeName => "employeeName",
            Field::EbNumber => "ebNumber",
            Field::DepartmentDesignation => "departmentDesignation",
            Field::LoanAmount => "loanAmount",
            Field::LoanReason => "loanReason",
            Field::MobileNumber => "mobileNumber",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::EmployeeName => "Employee Name",
            Field::EbNumber => "EB Number",
            Field::DepartmentDesignation => "Department & Designation",
            Field::LoanAmount => "Loan Amount (\u{20B9})",
            Field::LoanReason => "Loan Reason",
            Field::MobileNumber => "Mobile Number",
        }
    }
}

impl FromStr for Field {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| LetterError::UnknownField(s.to_string()))
    }
}

/// One loan application's field values
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub employee_name: String,
    pub eb_number: String,
    pub department_designation: String,
    pub loan_amount: String,
    pub loan_reason: LoanReason,
    pub mobile_number: String,
}

impl Draft {
    /// Parse a draft from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set one field, leaving the others untouched
    ///
    /// A loan reason must match one of the offered labels exactly.
    pub fn set(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::EmployeeName => self.employee_name = value.to_string(),
            Field::EbNumber => self.eb_number = value.to_string(),
            Field::DepartmentDesignation => self.department_designation = value.to_string(),
            Field::LoanAmount => self.loan_amount = value.to_string(),
            Field::LoanReason => self.loan_reason = value.parse()?,
            Field::MobileNumber => self.mobile_number = value.to_string(),
        }
        Ok(())
    }

    /// Current value of one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EmployeeName => &self.employee_name,
            Field::EbNumber => &self.eb_number,
            Field::DepartmentDesignation => &self.department_designation,
            Field::LoanAmount => &self.loan_amount,
            Field::LoanReason => self.loan_reason.label(),
            Field::MobileNumber => &self.mobile_number,
        }
    }

    /// Names of required fields that are still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .map(|field| field.name())
            .collect()
    }

    /// True when every required field is non-empty
    pub fn is_valid(&self) -> bool {
        Field::REQUIRED
            .iter()
            .all(|field| !self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_reason_is_house_construction() {
        assert_eq!(Draft::default().loan_reason, LoanReason::HouseConstruction);
    }

    #[test]
    fn test_reason_from_label() {
        assert_eq!(
            "Children's Education".parse::<LoanReason>().unwrap(),
            LoanReason::ChildrensEducation
        );
        assert!(matches!(
            "Vacation".parse::<LoanReason>(),
            Err(LetterError::UnknownLoanReason(_))
        ));
    }

    #[test]
    fn test_field_names_roundtrip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "salary".parse::<Field>(),
            Err(LetterError::UnknownField(_))
        ));
    }

    #[test]
    fn test_set_is_partial() {
        let mut draft = Draft::default();
        draft.set(Field::EmployeeName, "A Kumar").unwrap();
        draft.set(Field::EbNumber, "EB123").unwrap();

        assert_eq!(draft.employee_name, "A Kumar");
        assert_eq!(draft.eb_number, "EB123");
        assert_eq!(draft.mobile_number, "");
    }

    #[test]
    fn test_bad_reason_leaves_draft_unchanged() {
        let mut draft = Draft::default();
        draft.set(Field::LoanReason, "Other").unwrap();
        assert!(draft.set(Field::LoanReason, "Holiday").is_err());
        assert_eq!(draft.loan_reason, LoanReason::Other);
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let mut draft = Draft::default();
        draft.set(Field::DepartmentDesignation, "Weaving").unwrap();
        assert_eq!(
            draft.missing_fields(),
            vec!["employeeName", "ebNumber", "loanAmount", "mobileNumber"]
        );
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let draft = Draft {
            employee_name: " ".into(),
            eb_number: " ".into(),
            department_designation: " ".into(),
            loan_amount: " ".into(),
            mobile_number: " ".into(),
            ..Draft::default()
        };
        assert!(draft.is_valid());
    }

    #[test]
    fn test_draft_json_uses_form_names() {
        let draft = Draft::from_json(
            r#"{ "employeeName": "A Kumar", "loanReason": "Medical Treatment" }"#,
        )
        .unwrap();
        assert_eq!(draft.employee_name, "A Kumar");
        assert_eq!(draft.loan_reason, LoanReason::MedicalTreatment);
        assert_eq!(draft.eb_number, "");

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["loanReason"], "Medical Treatment");
        assert_eq!(json["mobileNumber"], "");
    }

    #[test]
    fn test_draft_json_rejects_unknown_reason() {
        assert!(Draft::from_json(r#"{ "loanReason": "Holiday" }"#).is_err());
    }
}
