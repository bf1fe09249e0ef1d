//! Field extraction from semi-structured summary text.
//!
//! The summarizer is asked to emit `<Label>: <value>` lines for six known
//! labels, but its output is not guaranteed. Extraction is tolerant: it
//! scans lines independently and degrades to `Unknown` for anything it
//! cannot place. It never fails.

use crate::record::{FieldValue, PatientFields};
use tracing::debug;

/// Recognized labels, in the order they claim a line.
///
/// A line is claimed by the first label whose `<Label>:` text occurs
/// anywhere in it. Label text inside another field's value can therefore
/// misfire; that first-match-per-line rule is deliberate.
const LABELS: [&str; 6] = [
    "Patient Name",
    "Age",
    "Gender",
    "Estimated Disease",
    "Symptoms",
    "Patient History",
];

/// Parse a summary into the six patient fields.
///
/// Each matching line contributes everything after its first colon, trimmed
/// of surrounding whitespace. A label appearing on several lines keeps the
/// last occurrence. Labels not found stay `Unknown`.
#[must_use]
pub fn extract_patient_fields(summary: &str) -> PatientFields {
    let mut fields = PatientFields::default();

    for line in summary.lines() {
        let Some(label) = LABELS
            .iter()
            .find(|label| line.contains(&format!("{label}:")))
        else {
            continue;
        };
        let Some((_, rest)) = line.split_once(':') else {
            continue;
        };
        let value = FieldValue::from_text(rest.trim());
        debug!("extracted field (label={label}, value={value})");
        *field_slot(&mut fields, label) = value;
    }

    fields
}

fn field_slot<'a>(fields: &'a mut PatientFields, label: &str) -> &'a mut FieldValue {
    match label {
        "Patient Name" => &mut fields.patient_name,
        "Age" => &mut fields.age,
        "Gender" => &mut fields.gender,
        "Estimated Disease" => &mut fields.estimated_disease,
        "Symptoms" => &mut fields.symptoms,
        _ => &mut fields.patient_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    #[test]
    fn extracts_all_six_labels() {
        let summary = "Patient Name: John Smith\n\
                       Age: 45\n\
                       Gender: Male\n\
                       Estimated Disease: Flu\n\
                       Symptoms: fever, cough\n\
                       Patient History: none";
        let fields = extract_patient_fields(summary);

        assert_eq!(fields.patient_name, FieldValue::Known("John Smith".into()));
        assert_eq!(fields.age, FieldValue::Known("45".into()));
        assert_eq!(fields.gender, FieldValue::Known("Male".into()));
        assert_eq!(fields.estimated_disease, FieldValue::Known("Flu".into()));
        assert_eq!(fields.symptoms, FieldValue::Known("fever, cough".into()));
        assert_eq!(fields.patient_history, FieldValue::Known("none".into()));
    }

    #[test]
    fn missing_labels_stay_unknown() {
        let fields = extract_patient_fields("Patient Name: Jane Doe");

        assert_eq!(fields.patient_name, FieldValue::Known("Jane Doe".into()));
        assert!(fields.age.is_unknown());
        assert!(fields.gender.is_unknown());
        assert!(fields.estimated_disease.is_unknown());
        assert!(fields.symptoms.is_unknown());
        assert!(fields.patient_history.is_unknown());
    }

    #[test]
    fn empty_input_yields_all_unknown() {
        let fields = extract_patient_fields("");
        assert_eq!(fields, PatientFields::default());
    }

    #[test]
    fn last_occurrence_of_a_duplicate_label_wins() {
        let fields = extract_patient_fields("Age: 30\nAge: 31");
        assert_eq!(fields.age, FieldValue::Known("31".into()));
    }

    #[test]
    fn value_starts_after_the_first_colon_of_the_line() {
        // The line's first colon precedes the label; the captured value
        // keeps the label text, matching the source line-split behavior.
        let fields = extract_patient_fields("note: Age: 45");
        assert_eq!(fields.age, FieldValue::Known("Age: 45".into()));
    }

    #[test]
    fn first_matching_label_claims_the_line() {
        // Both labels occur in one line; Patient Name is tested first.
        let fields = extract_patient_fields("Patient Name: see Age: field");
        assert_eq!(
            fields.patient_name,
            FieldValue::Known("see Age: field".into())
        );
        assert!(fields.age.is_unknown());
    }

    #[test]
    fn markdown_decorated_labels_still_match() {
        let fields = extract_patient_fields("- **Patient Name:** Jane Doe");
        assert_eq!(
            fields.patient_name,
            FieldValue::Known("** Jane Doe".into())
        );
    }

    #[test]
    fn unknown_sentinel_text_maps_to_unknown_variant() {
        let fields = extract_patient_fields("Gender: Unknown");
        assert!(fields.gender.is_unknown());
    }

    #[test]
    fn no_content_validation_is_applied() {
        let fields = extract_patient_fields("Age: forty-five\nGender: N/A");
        assert_eq!(fields.age, FieldValue::Known("forty-five".into()));
        assert_eq!(fields.gender, FieldValue::Known("N/A".into()));
    }
}
