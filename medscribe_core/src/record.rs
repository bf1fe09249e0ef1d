//! Patient record model shared across the workspace.
//!
//! A record is one encounter: the raw transcript, the model summary, and the
//! six extracted fields. Records are immutable once created; the store only
//! ever appends.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Sentinel text persisted for a field that could not be determined.
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// An extracted field value, with unknown as an explicit variant rather
/// than a magic string.
///
/// Serializes as the bare string value, with [`UNKNOWN_SENTINEL`] standing
/// in for `Unknown`, so the persisted log stays human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    Known(String),
    #[default]
    Unknown,
}

impl FieldValue {
    /// Build a value from extracted text. The sentinel text maps back to
    /// `Unknown` so serde round-trips are lossless.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text == UNKNOWN_SENTINEL {
            Self::Unknown
        } else {
            Self::Known(text)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value,
            Self::Unknown => UNKNOWN_SENTINEL,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_text(text))
    }
}

/// The six fields extracted from an encounter summary.
///
/// Every field is always present; extraction that finds nothing leaves the
/// field `Unknown` instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PatientFields {
    pub patient_name: FieldValue,
    pub age: FieldValue,
    pub gender: FieldValue,
    pub estimated_disease: FieldValue,
    pub symptoms: FieldValue,
    pub patient_history: FieldValue,
}

/// One persisted encounter row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Generated at write time, never reused.
    pub id: Uuid,
    /// Full transcript the summary was produced from.
    pub raw_input: String,
    /// Model-generated summary text.
    pub summary: String,
    #[serde(flatten)]
    pub fields: PatientFields,
    /// Calendar date derived from the write-time instant.
    pub diagnosis_date: NaiveDate,
    /// Full write-time instant.
    pub timestamp: DateTime<Utc>,
}

impl PatientRecord {
    /// Create a record stamped with the current instant and a fresh id.
    #[must_use]
    pub fn new(fields: PatientFields, raw_input: String, summary: String) -> Self {
        let timestamp = Utc::now();
        Self {
            id: Uuid::new_v4(),
            raw_input,
            summary,
            fields,
            diagnosis_date: timestamp.date_naive(),
            timestamp,
        }
    }

    /// Flat textual rendering of every field value, used for keyword
    /// relevance matching and for the responder's context table rows.
    #[must_use]
    pub fn render_text(&self) -> String {
        [
            self.id.to_string(),
            self.raw_input.clone(),
            self.summary.clone(),
            self.fields.patient_name.to_string(),
            self.fields.age.to_string(),
            self.fields.gender.to_string(),
            self.fields.estimated_disease.to_string(),
            self.fields.symptoms.to_string(),
            self.fields.patient_history.to_string(),
            self.diagnosis_date.to_string(),
            self.timestamp.to_rfc3339(),
        ]
        .join(" ")
    }
}
