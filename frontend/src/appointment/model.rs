//! The appointment request payload and its fixed catalogs.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

/// Declares a fixed, ordered catalog of options. Each variant carries the
/// label shown in the form, which is also the value sent over the wire.
macro_rules! catalog {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

catalog! {
    /// Services that can be requested from the booking form.
    ServiceType {
        DoctorConsultation => "In-Home Doctor Consultation",
        Physiotherapy => "In-Home Physiotherapy",
        NursingCare => "In-Home Nursing Care",
        Ecg => "In-Home ECG",
    }
}

catalog! {
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

catalog! {
    Complaint {
        Fever => "Fever",
        Headache => "Headache",
        Bodyache => "Bodyache",
        Weakness => "Weakness",
        ChestPain => "Chest Pain",
        AbdomenPain => "Abdomen Pain",
        Vomiting => "Vomiting",
        CoughAndCold => "Cough & Cold",
        Dizziness => "Dizziness",
        Breathlessness => "Breathlessness",
        LooseMotion => "Loose Motion",
        BurningUrination => "Burning Urination",
        RegularCheckup => "Regular Checkup",
        BodyPain => "Body Pain",
        Other => "Other",
    }
}

catalog! {
    /// How long the patient has had the complaint, shortest first.
    SinceWhen {
        LessThanADay => "Less than 1 Day",
        OneToTwoDays => "1-2 Days",
        TwoToThreeDays => "2-3 Days",
        FourToSevenDays => "4-7 Days",
        MoreThanAWeek => "More than a Week",
    }
}

catalog! {
    Referral {
        Google => "Google",
        PastUser => "Past User",
        FriendsOrFamily => "Friends or Family",
        SocialMedia => "Social Media",
        OfflineAdvertisement => "Offline Advertisement",
    }
}

/// Every input of the booking form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ServiceRequirement,
    PatientFirstName,
    PatientLastName,
    Gender,
    Age,
    Complaints,
    OtherComplaint,
    SinceWhen,
    MedicalHistory,
    GuardianFirstName,
    GuardianLastName,
    GuardianPhone,
    GuardianEmail,
    AddressStreet,
    AddressLandmark,
    AddressPin,
    Referral,
    Consent,
}

const TEXT_FIELDS: &[Field] = &[
    Field::PatientFirstName,
    Field::PatientLastName,
    Field::Age,
    Field::OtherComplaint,
    Field::MedicalHistory,
    Field::GuardianFirstName,
    Field::GuardianLastName,
    Field::GuardianPhone,
    Field::GuardianEmail,
    Field::AddressStreet,
    Field::AddressLandmark,
    Field::AddressPin,
];

/// One user edit, produced by an input's change handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Text(Field, String),
    ToggleService(ServiceType),
    ToggleComplaint(Complaint),
    Gender(Gender),
    SinceWhen(SinceWhen),
    Referral(Referral),
    Consent(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Text(field, _) => *field,
            FieldUpdate::ToggleService(_) => Field::ServiceRequirement,
            FieldUpdate::ToggleComplaint(_) => Field::Complaints,
            FieldUpdate::Gender(_) => Field::Gender,
            FieldUpdate::SinceWhen(_) => Field::SinceWhen,
            FieldUpdate::Referral(_) => Field::Referral,
            FieldUpdate::Consent(_) => Field::Consent,
        }
    }
}

/// Form payload for one booking attempt.
///
/// A fresh, empty instance is created every time the booking modal opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub service_requirement: BTreeSet<ServiceType>,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub gender: Option<Gender>,
    pub age: String,
    pub complaints: BTreeSet<Complaint>,
    pub other_complaint: String,
    pub since_when: Option<SinceWhen>,
    pub medical_history: String,
    pub guardian_first_name: String,
    pub guardian_last_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub address_street: String,
    pub address_landmark: String,
    pub address_pin: String,
    pub referral: Option<Referral>,
    pub consent: bool,
}

impl AppointmentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with surrounding whitespace stripped from every text field, so
    /// the payload carries exactly the text that was validated.
    pub fn normalized(&self) -> Self {
        let mut request = self.clone();
        for field in TEXT_FIELDS {
            if let Some(slot) = request.text_mut(*field) {
                let trimmed = slot.trim();
                if trimmed.len() != slot.len() {
                    *slot = trimmed.to_string();
                }
            }
        }
        request
    }

    /// Current contents of a free-text field. Non-text fields read as empty.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::PatientFirstName => &self.patient_first_name,
            Field::PatientLastName => &self.patient_last_name,
            Field::Age => &self.age,
            Field::OtherComplaint => &self.other_complaint,
            Field::MedicalHistory => &self.medical_history,
            Field::GuardianFirstName => &self.guardian_first_name,
            Field::GuardianLastName => &self.guardian_last_name,
            Field::GuardianPhone => &self.guardian_phone,
            Field::GuardianEmail => &self.guardian_email,
            Field::AddressStreet => &self.address_street,
            Field::AddressLandmark => &self.address_landmark,
            Field::AddressPin => &self.address_pin,
            _ => "",
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::PatientFirstName => Some(&mut self.patient_first_name),
            Field::PatientLastName => Some(&mut self.patient_last_name),
            Field::Age => Some(&mut self.age),
            Field::OtherComplaint => Some(&mut self.other_complaint),
            Field::MedicalHistory => Some(&mut self.medical_history),
            Field::GuardianFirstName => Some(&mut self.guardian_first_name),
            Field::GuardianLastName => Some(&mut self.guardian_last_name),
            Field::GuardianPhone => Some(&mut self.guardian_phone),
            Field::GuardianEmail => Some(&mut self.guardian_email),
            Field::AddressStreet => Some(&mut self.address_street),
            Field::AddressLandmark => Some(&mut self.address_landmark),
            Field::AddressPin => Some(&mut self.address_pin),
            _ => None,
        }
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Text(field, value) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = value;
                }
            }
            FieldUpdate::ToggleService(service) => {
                if !self.service_requirement.remove(&service) {
                    self.service_requirement.insert(service);
                }
            }
            FieldUpdate::ToggleComplaint(complaint) => {
                if !self.complaints.remove(&complaint) {
                    self.complaints.insert(complaint);
                }
            }
            FieldUpdate::Gender(gender) => self.gender = Some(gender),
            FieldUpdate::SinceWhen(since) => self.since_when = Some(since),
            FieldUpdate::Referral(referral) => self.referral = Some(referral),
            FieldUpdate::Consent(consent) => self.consent = consent,
        }
    }

    pub fn mentions_other_complaint(&self) -> bool {
        self.complaints.contains(&Complaint::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_labels_round_trip() {
        assert_eq!(ServiceType::NursingCare.label(), "In-Home Nursing Care");
        assert_eq!(SinceWhen::OneToTwoDays.label(), "1-2 Days");
        assert_eq!(Complaint::CoughAndCold.label(), "Cough & Cold");
        assert_eq!(Complaint::ALL.len(), 15);
        assert_eq!(SinceWhen::ALL.first(), Some(&SinceWhen::LessThanADay));
    }

    #[test]
    fn test_toggles_add_and_remove() {
        let mut request = AppointmentRequest::new();
        request.apply(FieldUpdate::ToggleComplaint(Complaint::Fever));
        request.apply(FieldUpdate::ToggleComplaint(Complaint::Other));
        assert!(request.mentions_other_complaint());

        request.apply(FieldUpdate::ToggleComplaint(Complaint::Other));
        assert!(!request.mentions_other_complaint());
        assert_eq!(request.complaints.len(), 1);
    }

    #[test]
    fn test_text_updates_only_touch_text_fields() {
        let mut request = AppointmentRequest::new();
        request.apply(FieldUpdate::Text(Field::PatientFirstName, "Asha".into()));
        request.apply(FieldUpdate::Text(Field::Consent, "yes".into()));

        assert_eq!(request.text(Field::PatientFirstName), "Asha");
        assert!(!request.consent);
    }

    #[test]
    fn test_normalized_trims_every_text_field() {
        let mut request = AppointmentRequest::new();
        request.apply(FieldUpdate::Text(Field::PatientFirstName, "  Asha ".into()));
        request.apply(FieldUpdate::Text(Field::AddressPin, "\t800020\n".into()));
        request.apply(FieldUpdate::Consent(true));

        let normalized = request.normalized();
        assert_eq!(normalized.patient_first_name, "Asha");
        assert_eq!(normalized.address_pin, "800020");
        assert!(normalized.consent);
        assert_eq!(request.patient_first_name, "  Asha ");
    }

    #[test]
    fn test_serializes_with_camel_case_labels() {
        let mut request = AppointmentRequest::new();
        request.apply(FieldUpdate::ToggleService(ServiceType::Ecg));
        request.apply(FieldUpdate::ToggleService(ServiceType::DoctorConsultation));
        request.apply(FieldUpdate::Gender(Gender::Female));
        request.apply(FieldUpdate::Text(Field::GuardianPhone, "9876543210".into()));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["serviceRequirement"],
            serde_json::json!(["In-Home Doctor Consultation", "In-Home ECG"])
        );
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["guardianPhone"], "9876543210");
        assert_eq!(json["sinceWhen"], serde_json::Value::Null);
        assert_eq!(json["consent"], false);
    }
}
