//! Per-field validation rules for the booking form.
//!
//! Rules are evaluated in declaration order and the first failing rule wins,
//! so a blank phone number reports "required" rather than "invalid format".

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::model::{AppointmentRequest, Field};

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
static PIN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").unwrap());
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static AGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,3}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field:?}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// Fixed formats a text field can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Phone,
    Pin,
    Email,
    Age,
}

impl Format {
    pub fn regex(self) -> &'static Regex {
        match self {
            Format::Phone => &*PHONE_PATTERN,
            Format::Pin => &*PIN_PATTERN,
            Format::Email => &*EMAIL_PATTERN,
            Format::Age => &*AGE_PATTERN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    Pattern(Format, &'static str),
    MinLength(usize, &'static str),
}

impl Rule {
    fn check(&self, value: &FieldValue) -> Result<(), &'static str> {
        match self {
            Rule::Required(message) => {
                if value.is_empty() {
                    Err(*message)
                } else {
                    Ok(())
                }
            }
            // Optional fields left blank are not format-checked.
            Rule::Pattern(format, message) => match value {
                FieldValue::Text(text) if !text.is_empty() && !format.regex().is_match(text) => {
                    Err(*message)
                }
                _ => Ok(()),
            },
            Rule::MinLength(min, message) => match value {
                FieldValue::Text(text) if !text.is_empty() && text.chars().count() < *min => {
                    Err(*message)
                }
                _ => Ok(()),
            },
        }
    }
}

/// A field's value reduced to what the rules care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Selected(usize),
    Flag(bool),
}

impl FieldValue<'_> {
    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Selected(count) => *count == 0,
            FieldValue::Flag(flag) => !flag,
        }
    }
}

fn value_of(request: &AppointmentRequest, field: Field) -> FieldValue<'_> {
    match field {
        Field::ServiceRequirement => FieldValue::Selected(request.service_requirement.len()),
        Field::Gender => FieldValue::Selected(request.gender.is_some() as usize),
        Field::Complaints => FieldValue::Selected(request.complaints.len()),
        Field::SinceWhen => FieldValue::Selected(request.since_when.is_some() as usize),
        Field::Referral => FieldValue::Selected(request.referral.is_some() as usize),
        Field::Consent => FieldValue::Flag(request.consent),
        text_field => FieldValue::Text(request.text(text_field).trim()),
    }
}

/// The rules declared for a field. Optional fields return only format rules.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::ServiceRequirement => &[Rule::Required("Please select a service")],
        Field::PatientFirstName | Field::GuardianFirstName => {
            &[Rule::Required("First name is required")]
        }
        Field::PatientLastName | Field::GuardianLastName => {
            &[Rule::Required("Last name is required")]
        }
        Field::Gender => &[Rule::Required("Please select gender")],
        Field::Age => &[
            Rule::Required("Age is required"),
            Rule::Pattern(Format::Age, "Enter a valid age"),
        ],
        Field::Complaints => &[Rule::Required("Please select at least one complaint")],
        Field::OtherComplaint => &[Rule::Required("Please describe the complaint")],
        Field::SinceWhen => &[Rule::Required("Please select duration")],
        Field::MedicalHistory => &[],
        Field::GuardianPhone => &[
            Rule::Required("Phone number is required"),
            Rule::Pattern(Format::Phone, "Enter a valid 10-digit Indian number"),
        ],
        Field::GuardianEmail => &[Rule::Pattern(Format::Email, "Enter a valid email address")],
        Field::AddressStreet => &[
            Rule::Required("Street address is required"),
            Rule::MinLength(3, "Street address is too short"),
        ],
        Field::AddressLandmark => &[Rule::Required("Landmark is required")],
        Field::AddressPin => &[
            Rule::Required("Pin code is required"),
            Rule::Pattern(Format::Pin, "Enter a valid 6-digit PIN code"),
        ],
        Field::Referral => &[Rule::Required("Please select a referral source")],
        Field::Consent => &[Rule::Required("You must accept the terms and conditions")],
    }
}

/// Whether the field takes part in validation for this request at all.
/// The free-text complaint only matters once "Other" is ticked.
fn applies(request: &AppointmentRequest, field: Field) -> bool {
    match field {
        Field::OtherComplaint => request.mentions_other_complaint(),
        _ => true,
    }
}

pub fn validate_field(request: &AppointmentRequest, field: Field) -> Result<(), ValidationError> {
    if !applies(request, field) {
        return Ok(());
    }
    let value = value_of(request, field);
    for rule in rules_for(field) {
        rule.check(&value)
            .map_err(|message| ValidationError { field, message })?;
    }
    Ok(())
}

/// Failures keyed by field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// First message among `fields`, for inputs rendered as one group
    /// (first and last name share a single error line).
    pub fn first_of(&self, fields: &[Field]) -> Option<&'static str> {
        fields.iter().find_map(|field| self.get(*field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn set(&mut self, result: Result<(), ValidationError>, field: Field) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(err) => {
                self.0.insert(err.field, err.message);
            }
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn clear_fields(&mut self, fields: &[Field]) {
        for field in fields {
            self.0.remove(field);
        }
    }
}

/// Validates every field in `fields`, collecting all failures.
pub fn validate_fields(request: &AppointmentRequest, fields: &[Field]) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in fields {
        errors.set(validate_field(request, *field), *field);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::model::{Complaint, FieldUpdate, Gender};
    use proptest::prelude::*;

    fn with_text(field: Field, value: &str) -> AppointmentRequest {
        let mut request = AppointmentRequest::new();
        request.apply(FieldUpdate::Text(field, value.to_string()));
        request
    }

    #[test]
    fn test_required_text_fields() {
        let request = AppointmentRequest::new();
        let err = validate_field(&request, Field::PatientFirstName).unwrap_err();
        assert_eq!(err.message, "First name is required");

        let blank = with_text(Field::AddressLandmark, "   ");
        assert_eq!(
            validate_field(&blank, Field::AddressLandmark).unwrap_err().message,
            "Landmark is required"
        );
        assert!(validate_field(&with_text(Field::PatientFirstName, "Asha"), Field::PatientFirstName).is_ok());
    }

    #[test]
    fn test_required_selections_and_consent() {
        let mut request = AppointmentRequest::new();
        assert!(validate_field(&request, Field::Gender).is_err());
        assert!(validate_field(&request, Field::Complaints).is_err());
        assert_eq!(
            validate_field(&request, Field::Consent).unwrap_err().message,
            "You must accept the terms and conditions"
        );

        request.apply(FieldUpdate::Gender(Gender::Male));
        request.apply(FieldUpdate::Consent(true));
        assert!(validate_field(&request, Field::Gender).is_ok());
        assert!(validate_field(&request, Field::Consent).is_ok());
    }

    #[test]
    fn test_phone_examples() {
        assert!(validate_field(&with_text(Field::GuardianPhone, "9876543210"), Field::GuardianPhone).is_ok());
        for bad in ["12345", "5123456789", "91234567890", "98765"] {
            let err = validate_field(&with_text(Field::GuardianPhone, bad), Field::GuardianPhone).unwrap_err();
            assert!(err.message.contains("10-digit"), "{bad} gave {}", err.message);
        }
        let err = validate_field(&AppointmentRequest::new(), Field::GuardianPhone).unwrap_err();
        assert_eq!(err.message, "Phone number is required");
    }

    #[test]
    fn test_pin_examples() {
        assert!(validate_field(&with_text(Field::AddressPin, "800020"), Field::AddressPin).is_ok());
        assert!(validate_field(&with_text(Field::AddressPin, "80002"), Field::AddressPin).is_err());
        assert!(validate_field(&with_text(Field::AddressPin, "8000201"), Field::AddressPin).is_err());
    }

    #[test]
    fn test_optional_email() {
        assert!(validate_field(&AppointmentRequest::new(), Field::GuardianEmail).is_ok());
        assert!(validate_field(&with_text(Field::GuardianEmail, "asha@example.in"), Field::GuardianEmail).is_ok());
        assert_eq!(
            validate_field(&with_text(Field::GuardianEmail, "asha@"), Field::GuardianEmail)
                .unwrap_err()
                .message,
            "Enter a valid email address"
        );
    }

    #[test]
    fn test_min_length_and_age() {
        assert_eq!(
            validate_field(&with_text(Field::AddressStreet, "G3"), Field::AddressStreet)
                .unwrap_err()
                .message,
            "Street address is too short"
        );
        assert!(validate_field(&with_text(Field::Age, "34"), Field::Age).is_ok());
        assert!(validate_field(&with_text(Field::Age, "-4"), Field::Age).is_err());
        assert!(validate_field(&with_text(Field::Age, "thirty"), Field::Age).is_err());
    }

    #[test]
    fn test_other_complaint_only_required_when_ticked() {
        let mut request = AppointmentRequest::new();
        assert!(validate_field(&request, Field::OtherComplaint).is_ok());

        request.apply(FieldUpdate::ToggleComplaint(Complaint::Other));
        assert_eq!(
            validate_field(&request, Field::OtherComplaint).unwrap_err().message,
            "Please describe the complaint"
        );
        request.apply(FieldUpdate::Text(Field::OtherComplaint, "Swollen ankle".into()));
        assert!(validate_field(&request, Field::OtherComplaint).is_ok());
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let request = with_text(Field::GuardianPhone, " 98765 ");
        let before = request.clone();
        let _ = validate_fields(&request, &[Field::GuardianPhone, Field::Consent]);
        assert_eq!(request, before);
    }

    #[test]
    fn test_validate_fields_collects_every_failure() {
        let errors = validate_fields(
            &AppointmentRequest::new(),
            &[Field::PatientFirstName, Field::PatientLastName, Field::MedicalHistory],
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.first_of(&[Field::PatientFirstName, Field::PatientLastName]),
            Some("First name is required")
        );
        assert!(!errors.contains(Field::MedicalHistory));
    }

    proptest! {
        #[test]
        fn prop_indian_mobile_numbers_pass(first in "[6-9]", rest in "[0-9]{9}") {
            let phone = format!("{first}{rest}");
            prop_assert!(validate_field(&with_text(Field::GuardianPhone, &phone), Field::GuardianPhone).is_ok());
        }

        #[test]
        fn prop_numbers_starting_low_fail(first in "[0-5]", rest in "[0-9]{9}") {
            let phone = format!("{first}{rest}");
            prop_assert!(validate_field(&with_text(Field::GuardianPhone, &phone), Field::GuardianPhone).is_err());
        }

        #[test]
        fn prop_pin_needs_exactly_six_digits(pin in "[0-9]{1,12}") {
            let result = validate_field(&with_text(Field::AddressPin, &pin), Field::AddressPin);
            prop_assert_eq!(result.is_ok(), pin.len() == 6);
        }
    }
}
