// libs/booking-cell/src/models.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shared_models::error::BookingError;

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub symptoms: String,
    pub doctor_type: String,
}

impl BookingRequest {
    /// Parses and validates a raw request body.
    ///
    /// Empty, unparseable or falsy JSON (`null`, `{}`, `[]`, `false`, `0`, `""`)
    /// and any non-object document count as a missing body. Fields that are
    /// absent or falsy count as missing parameters; other non-string values
    /// are rendered as JSON text.
    pub fn from_json_body(body: &[u8]) -> Result<Self, BookingError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| BookingError::MissingBody)?;

        if is_falsy(&value) {
            return Err(BookingError::MissingBody);
        }

        let object = value.as_object().ok_or(BookingError::MissingBody)?;

        match (required_text(object, "symptoms"), required_text(object, "doctorType")) {
            (Some(symptoms), Some(doctor_type)) => Ok(Self { symptoms, doctor_type }),
            _ => Err(BookingError::MissingField),
        }
    }

    pub fn doctor_type(&self) -> DoctorType {
        DoctorType::from(self.doctor_type.as_str())
    }
}

fn required_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(value) if !is_falsy(value) => Some(match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }),
        _ => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

// ==============================================================================
// SCHEDULING MODELS
// ==============================================================================

/// Requested specialist. Matching is exact and case sensitive; anything
/// unrecognised is kept verbatim under `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoctorType {
    GeneralPractitioner,
    Dermatologist,
    Other(String),
}

impl From<&str> for DoctorType {
    fn from(value: &str) -> Self {
        match value {
            "General Practitioner" => DoctorType::GeneralPractitioner,
            "Dermatologist" => DoctorType::Dermatologist,
            other => DoctorType::Other(other.to_string()),
        }
    }
}

impl DoctorType {
    pub fn booked_slot(&self) -> BookedSlot {
        match self {
            DoctorType::GeneralPractitioner => BookedSlot::Tomorrow,
            DoctorType::Dermatologist => BookedSlot::InTwoDays,
            DoctorType::Other(_) => BookedSlot::InFiveDays,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookedSlot {
    Tomorrow,
    InTwoDays,
    InFiveDays,
}

impl BookedSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookedSlot::Tomorrow => "Tomorrow, 10:00 AM",
            BookedSlot::InTwoDays => "In 2 days, 2:30 PM",
            BookedSlot::InFiveDays => "In 5 days, 11:00 AM",
        }
    }
}

impl fmt::Display for BookedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eight uppercase hex characters handed back as a booking receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfirmationNumber(String);

impl ConfirmationNumber {
    pub const BYTES: usize = 4;

    pub fn from_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self(hex::encode_upper(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub confirmation_number: ConfirmationNumber,
    pub booked_symptoms: String,
    pub booked_doctor_type: String,
    pub booked_time: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingSuccess {
    pub success: bool,
    pub message: String,
    pub data: BookingData,
}

impl BookingSuccess {
    pub fn new(request: BookingRequest, slot: BookedSlot, confirmation_number: ConfirmationNumber) -> Self {
        let message = format!(
            "Appointment for {} with a {} has been successfully booked for {}.",
            request.symptoms, request.doctor_type, slot
        );

        Self {
            success: true,
            message,
            data: BookingData {
                confirmation_number,
                booked_symptoms: request.symptoms,
                booked_doctor_type: request.doctor_type,
                booked_time: slot.as_str().to_string(),
            },
        }
    }
}

/// Outcome of one booking attempt; the error side renders as the failure body.
pub type BookingResult = Result<BookingSuccess, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_doctor_type_slot_mapping() {
        assert_eq!(DoctorType::from("General Practitioner").booked_slot().as_str(), "Tomorrow, 10:00 AM");
        assert_eq!(DoctorType::from("Dermatologist").booked_slot().as_str(), "In 2 days, 2:30 PM");
        assert_eq!(DoctorType::from("Cardiologist").booked_slot().as_str(), "In 5 days, 11:00 AM");
    }

    #[test]
    fn test_doctor_type_match_is_case_sensitive() {
        assert_eq!(DoctorType::from("dermatologist"), DoctorType::Other("dermatologist".to_string()));
        assert_eq!(DoctorType::from("General practitioner").booked_slot(), BookedSlot::InFiveDays);
        assert_eq!(DoctorType::from(" Dermatologist").booked_slot(), BookedSlot::InFiveDays);
    }

    #[test]
    fn test_confirmation_number_is_uppercase_hex() {
        let number = ConfirmationNumber::from_bytes([0x0a, 0xbc, 0xde, 0xf1]);
        assert_eq!(number.as_str(), "0ABCDEF1");
        assert_eq!(number.to_string().len(), 8);
    }

    #[test]
    fn test_parse_valid_body() {
        let request = BookingRequest::from_json_body(br#"{"symptoms":"fever","doctorType":"General Practitioner"}"#).unwrap();
        assert_eq!(request.symptoms, "fever");
        assert_eq!(request.doctor_type(), DoctorType::GeneralPractitioner);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let request = BookingRequest::from_json_body(br#"{"symptoms":"rash","doctorType":"Dermatologist","urgent":true}"#).unwrap();
        assert_eq!(request.doctor_type, "Dermatologist");
    }

    #[test]
    fn test_missing_or_falsy_body() {
        let bodies: [&[u8]; 10] = [b"", b"not json", b"null", b"{}", b"[]", b"false", b"0", b"\"\"", b"[1, 2]", b"\"text\""];
        for body in bodies {
            assert_matches!(BookingRequest::from_json_body(body), Err(BookingError::MissingBody));
        }
    }

    #[test]
    fn test_missing_fields() {
        let bodies = [
            r#"{"symptoms":"","doctorType":"X"}"#,
            r#"{"symptoms":"cough","doctorType":""}"#,
            r#"{"symptoms":"cough"}"#,
            r#"{"doctorType":"Dermatologist"}"#,
            r#"{"symptoms":null,"doctorType":"Dermatologist"}"#,
            r#"{"symptoms":0,"doctorType":"Dermatologist"}"#,
            r#"{"symptoms":"fever","doctorType":false}"#,
            r#"{"symptoms":[],"doctorType":"Dermatologist"}"#,
            r#"{"symptoms":"fever","doctorType":{}}"#,
            r#"{"unrelated":"value"}"#,
        ];
        for body in bodies {
            assert_matches!(BookingRequest::from_json_body(body.as_bytes()), Err(BookingError::MissingField));
        }
    }

    #[test]
    fn test_truthy_non_string_fields_are_rendered_as_text() {
        let request = BookingRequest::from_json_body(br#"{"symptoms":42,"doctorType":true}"#).unwrap();
        assert_eq!(request.symptoms, "42");
        assert_eq!(request.doctor_type, "true");
        assert_eq!(request.doctor_type().booked_slot(), BookedSlot::InFiveDays);

        let request = BookingRequest::from_json_body(br#"{"symptoms":["itch","rash"],"doctorType":["Dermatologist"]}"#).unwrap();
        assert_eq!(request.symptoms, r#"["itch","rash"]"#);
        assert_eq!(request.doctor_type().booked_slot(), BookedSlot::InFiveDays);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let request = BookingRequest::from_json_body(br#"{"symptoms":" ","doctorType":"Dermatologist"}"#).unwrap();
        assert_eq!(request.symptoms, " ");
    }

    #[test]
    fn test_success_message_format() {
        let request = BookingRequest {
            symptoms: "headache".to_string(),
            doctor_type: "Neurologist".to_string(),
        };
        let success = BookingSuccess::new(request, BookedSlot::InFiveDays, ConfirmationNumber::from_bytes([0, 0, 0, 1]));
        assert!(success.success);
        assert_eq!(
            success.message,
            "Appointment for headache with a Neurologist has been successfully booked for In 5 days, 11:00 AM."
        );
        assert_eq!(success.data.confirmation_number.as_str(), "00000001");
        assert_eq!(success.data.booked_symptoms, "headache");
        assert_eq!(success.data.booked_doctor_type, "Neurologist");
    }
}
