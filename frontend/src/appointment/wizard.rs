//! Step gating for the two-page booking form.

use thiserror::Error;

use super::model::{AppointmentRequest, Field, FieldUpdate};
use super::validation::{validate_field, validate_fields, FieldErrors};

/// Patient details, checked before the guardian page can be shown.
pub const STEP_ONE_FIELDS: &[Field] = &[
    Field::ServiceRequirement,
    Field::PatientFirstName,
    Field::PatientLastName,
    Field::Gender,
    Field::Age,
    Field::Complaints,
    Field::OtherComplaint,
    Field::SinceWhen,
];

/// Guardian contact, address and consent, checked on submit.
pub const STEP_TWO_FIELDS: &[Field] = &[
    Field::GuardianFirstName,
    Field::GuardianLastName,
    Field::GuardianPhone,
    Field::GuardianEmail,
    Field::AddressStreet,
    Field::AddressLandmark,
    Field::AddressPin,
    Field::Referral,
    Field::Consent,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Step1,
    Step2,
    Submitting,
    Success,
}

impl WizardStep {
    /// The page number shown in the step indicator.
    pub fn page(self) -> u8 {
        match self {
            WizardStep::Step1 => 1,
            _ => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("submit is only available on the guardian page")]
    WrongStep(WizardStep),
}

/// Holds the request being edited, the active step and the errors on show.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentWizard {
    step: WizardStep,
    request: AppointmentRequest,
    errors: FieldErrors,
    submit_failed: bool,
}

impl Default for AppointmentWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Step1,
            request: AppointmentRequest::new(),
            errors: FieldErrors::default(),
            submit_failed: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn request(&self) -> &AppointmentRequest {
        &self.request
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the last submission attempt was rejected by the server.
    pub fn submit_failed(&self) -> bool {
        self.submit_failed
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.step, WizardStep::Step1 | WizardStep::Step2)
    }

    /// Applies one edit. Fields that already show an error are re-checked
    /// immediately so the message clears as soon as the input is fixed.
    pub fn update(&mut self, update: FieldUpdate) -> bool {
        if !self.is_editable() {
            return false;
        }
        let field = update.field();
        self.request.apply(update);

        if self.errors.contains(field) {
            self.errors.set(validate_field(&self.request, field), field);
        }
        if field == Field::Complaints && self.errors.contains(Field::OtherComplaint) {
            self.errors.set(
                validate_field(&self.request, Field::OtherComplaint),
                Field::OtherComplaint,
            );
        }
        true
    }

    /// Moves from the patient page to the guardian page if every patient
    /// field passes. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.step != WizardStep::Step1 {
            return false;
        }
        let errors = validate_fields(&self.request, STEP_ONE_FIELDS);
        self.errors.clear_fields(STEP_ONE_FIELDS);
        if errors.is_empty() {
            self.step = WizardStep::Step2;
            true
        } else {
            self.errors.merge(errors);
            false
        }
    }

    /// Returns to the patient page. Entered values are kept.
    pub fn back(&mut self) -> bool {
        if self.step != WizardStep::Step2 {
            return false;
        }
        self.step = WizardStep::Step1;
        true
    }

    /// Validates the guardian page and, if it passes, moves to `Submitting`
    /// and hands out a snapshot of the request to send.
    pub fn begin_submit(&mut self) -> Result<AppointmentRequest, SubmitBlocked> {
        match self.step {
            WizardStep::Step2 => {}
            WizardStep::Submitting => return Err(SubmitBlocked::InFlight),
            other => return Err(SubmitBlocked::WrongStep(other)),
        }

        let errors = validate_fields(&self.request, STEP_TWO_FIELDS);
        self.errors.clear_fields(STEP_TWO_FIELDS);
        if !errors.is_empty() {
            self.errors.merge(errors.clone());
            return Err(SubmitBlocked::Invalid(errors));
        }

        // Patient fields cannot change on this page, but the request is only
        // ever sent whole.
        let patient_errors = validate_fields(&self.request, STEP_ONE_FIELDS);
        if !patient_errors.is_empty() {
            self.step = WizardStep::Step1;
            self.errors.merge(patient_errors.clone());
            return Err(SubmitBlocked::Invalid(patient_errors));
        }

        self.step = WizardStep::Submitting;
        self.submit_failed = false;
        Ok(self.request.normalized())
    }

    /// The server accepted the request: the form data is released.
    pub fn resolve_success(&mut self) {
        if self.step == WizardStep::Submitting {
            self.step = WizardStep::Success;
            self.request = AppointmentRequest::new();
            self.errors = FieldErrors::default();
        }
    }

    /// The server rejected the request: back to the guardian page with
    /// everything still filled in.
    pub fn resolve_failure(&mut self) {
        if self.step == WizardStep::Submitting {
            self.step = WizardStep::Step2;
            self.submit_failed = true;
        }
    }

    pub fn dismiss_failure(&mut self) {
        self.submit_failed = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::appointment::model::{Complaint, Gender, Referral, ServiceType, SinceWhen};

    pub(crate) fn fill_patient(wizard: &mut AppointmentWizard) {
        wizard.update(FieldUpdate::ToggleService(ServiceType::NursingCare));
        wizard.update(FieldUpdate::Text(Field::PatientFirstName, "Asha".into()));
        wizard.update(FieldUpdate::Text(Field::PatientLastName, "Kumar".into()));
        wizard.update(FieldUpdate::Gender(Gender::Female));
        wizard.update(FieldUpdate::Text(Field::Age, "34".into()));
        wizard.update(FieldUpdate::ToggleComplaint(Complaint::Fever));
        wizard.update(FieldUpdate::SinceWhen(SinceWhen::OneToTwoDays));
    }

    pub(crate) fn fill_guardian(wizard: &mut AppointmentWizard, phone: &str) {
        wizard.update(FieldUpdate::Text(Field::GuardianFirstName, "Ravi".into()));
        wizard.update(FieldUpdate::Text(Field::GuardianLastName, "Kumar".into()));
        wizard.update(FieldUpdate::Text(Field::GuardianPhone, phone.into()));
        wizard.update(FieldUpdate::Text(Field::AddressStreet, "G-31, PC Colony".into()));
        wizard.update(FieldUpdate::Text(Field::AddressLandmark, "Near Kankarbagh Park".into()));
        wizard.update(FieldUpdate::Text(Field::AddressPin, "800020".into()));
        wizard.update(FieldUpdate::Referral(Referral::Google));
        wizard.update(FieldUpdate::Consent(true));
    }

    #[test]
    fn test_starts_on_step_one() {
        let wizard = AppointmentWizard::new();
        assert_eq!(wizard.step(), WizardStep::Step1);
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.step().page(), 1);
    }

    #[test]
    fn test_patient_scenario_advances() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Step2);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_each_missing_patient_field_blocks_next() {
        let required = [
            Field::ServiceRequirement,
            Field::PatientFirstName,
            Field::PatientLastName,
            Field::Gender,
            Field::Age,
            Field::Complaints,
            Field::SinceWhen,
        ];
        for missing in required {
            let mut wizard = AppointmentWizard::new();
            fill_patient(&mut wizard);
            match missing {
                Field::ServiceRequirement => {
                    wizard.update(FieldUpdate::ToggleService(ServiceType::NursingCare));
                }
                Field::Complaints => {
                    wizard.update(FieldUpdate::ToggleComplaint(Complaint::Fever));
                }
                Field::Gender => wizard.request.gender = None,
                Field::SinceWhen => wizard.request.since_when = None,
                text => {
                    wizard.update(FieldUpdate::Text(text, String::new()));
                }
            }

            assert!(!wizard.next(), "{missing:?} should block");
            assert_eq!(wizard.step(), WizardStep::Step1);
            let message = wizard.errors().get(missing).unwrap_or_default();
            assert!(!message.is_empty(), "{missing:?} has no message");
        }
    }

    #[test]
    fn test_next_ignores_guardian_fields() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.update(FieldUpdate::Text(Field::GuardianPhone, "123".into()));
        assert!(wizard.next());
    }

    #[test]
    fn test_back_keeps_values() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, "9876543210");
        let before = wizard.request().clone();

        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::Step1);
        assert_eq!(wizard.request(), &before);

        assert!(wizard.next());
        assert_eq!(wizard.request(), &before);
    }

    #[test]
    fn test_back_is_allowed_with_invalid_guardian_page() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        assert!(wizard.begin_submit().is_err());
        assert!(wizard.back());
    }

    #[test]
    fn test_bad_phone_blocks_submit() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, "98765");

        let blocked = wizard.begin_submit().unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Invalid(_)));
        assert_eq!(wizard.step(), WizardStep::Step2);
        assert_eq!(
            wizard.errors().get(Field::GuardianPhone),
            Some("Enter a valid 10-digit Indian number")
        );
    }

    #[test]
    fn test_padded_input_is_sent_as_validated() {
        use crate::appointment::validation::Format;

        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, " 9876543210 ");
        wizard.update(FieldUpdate::Text(Field::AddressPin, " 800020\t".into()));

        let sent = wizard.begin_submit().unwrap();
        assert!(Format::Phone.regex().is_match(&sent.guardian_phone));
        assert!(Format::Pin.regex().is_match(&sent.address_pin));
        assert_eq!(sent.guardian_phone, "9876543210");
        assert_eq!(sent.address_pin, "800020");
    }

    #[test]
    fn test_error_clears_once_field_is_fixed() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, "98765");
        let _ = wizard.begin_submit();

        wizard.update(FieldUpdate::Text(Field::GuardianPhone, "9876543210".into()));
        assert!(!wizard.errors().contains(Field::GuardianPhone));
        assert!(wizard.begin_submit().is_ok());
        assert_eq!(wizard.step(), WizardStep::Submitting);
    }

    #[test]
    fn test_submit_while_submitting_is_rejected() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, "9876543210");
        assert!(wizard.begin_submit().is_ok());
        assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::InFlight));
        assert!(!wizard.update(FieldUpdate::Consent(false)));
    }

    #[test]
    fn test_failure_returns_to_guardian_page_intact() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, "9876543210");
        let sent = wizard.begin_submit().unwrap();

        wizard.resolve_failure();
        assert_eq!(wizard.step(), WizardStep::Step2);
        assert!(wizard.submit_failed());
        assert_eq!(wizard.request(), &sent);
    }

    #[test]
    fn test_retry_revalidates_guardian_page() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, "9876543210");
        wizard.begin_submit().unwrap();
        wizard.resolve_failure();

        wizard.update(FieldUpdate::Consent(false));
        assert!(matches!(wizard.begin_submit(), Err(SubmitBlocked::Invalid(_))));
        assert!(wizard.errors().contains(Field::Consent));
    }

    #[test]
    fn test_success_releases_request() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.next();
        fill_guardian(&mut wizard, "9876543210");
        wizard.begin_submit().unwrap();

        wizard.resolve_success();
        assert_eq!(wizard.step(), WizardStep::Success);
        assert_eq!(wizard.request(), &AppointmentRequest::new());

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Step1);
    }

    #[test]
    fn test_submit_from_patient_page_is_wrong_step() {
        let mut wizard = AppointmentWizard::new();
        assert_eq!(
            wizard.begin_submit(),
            Err(SubmitBlocked::WrongStep(WizardStep::Step1))
        );
    }

    #[test]
    fn test_unticking_other_clears_its_error() {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        wizard.update(FieldUpdate::ToggleComplaint(Complaint::Other));
        assert!(!wizard.next());
        assert!(wizard.errors().contains(Field::OtherComplaint));

        wizard.update(FieldUpdate::ToggleComplaint(Complaint::Other));
        assert!(!wizard.errors().contains(Field::OtherComplaint));
        assert!(wizard.next());
    }
}
