//! Rendering selected records into the prompt's context block.

use medscribe_core::PatientRecord;

/// Column order of the rendered table, matching the persisted log schema.
const COLUMNS: [&str; 11] = [
    "id",
    "raw_input",
    "summary",
    "patient_name",
    "age",
    "gender",
    "estimated_disease",
    "symptoms",
    "patient_history",
    "diagnosis_date",
    "timestamp",
];

/// Render records as a flat textual table: a header row plus one row per
/// record, pipe-separated.
#[must_use]
pub fn render_context_table(records: &[&PatientRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(COLUMNS.join(" | "));

    for record in records {
        let row = [
            record.id.to_string(),
            record.raw_input.clone(),
            record.summary.clone(),
            record.fields.patient_name.to_string(),
            record.fields.age.to_string(),
            record.fields.gender.to_string(),
            record.fields.estimated_disease.to_string(),
            record.fields.symptoms.to_string(),
            record.fields.patient_history.to_string(),
            record.diagnosis_date.to_string(),
            record.timestamp.to_rfc3339(),
        ];
        lines.push(row.join(" | "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use medscribe_core::{FieldValue, PatientFields};

    #[test]
    fn table_has_header_and_one_row_per_record() {
        let fields = PatientFields {
            patient_name: FieldValue::Known("Jane Doe".to_string()),
            estimated_disease: FieldValue::Known("Diabetes".to_string()),
            ..PatientFields::default()
        };
        let record = PatientRecord::new(fields, "raw".to_string(), "sum".to_string());

        let table = render_context_table(&[&record]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id | raw_input | summary"));
        assert!(lines[1].contains("Jane Doe"));
        assert!(lines[1].contains("Diabetes"));
        assert!(lines[1].contains("Unknown"));
    }

    #[test]
    fn empty_selection_renders_header_only() {
        let table = render_context_table(&[]);
        assert_eq!(table.lines().count(), 1);
    }
}
