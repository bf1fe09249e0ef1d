//! Encounter intake pipeline: transcribe, summarize, extract, persist.

use crate::error::AssistantError;
use medscribe_core::{Summarizer, Transcriber, extract_patient_fields};
use medscribe_store::RecordLog;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Key fields of a newly created record, returned to the caller after an
/// encounter is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeSummary {
    pub id: Uuid,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub disease: String,
    pub symptoms: String,
}

/// The record-and-summarize pipeline.
///
/// Any collaborator failure aborts the whole request; nothing is persisted
/// unless every step before the append succeeded.
pub struct Intake<T, Z>
where
    T: Transcriber,
    Z: Summarizer,
{
    transcriber: T,
    summarizer: Z,
}

impl<T, Z> Intake<T, Z>
where
    T: Transcriber,
    Z: Summarizer,
{
    pub const fn new(transcriber: T, summarizer: Z) -> Self {
        Self {
            transcriber,
            summarizer,
        }
    }

    /// Run the full pipeline from a captured audio file.
    pub async fn record_file(
        &self,
        log: &mut RecordLog,
        audio: &Path,
    ) -> Result<IntakeSummary, AssistantError> {
        let transcript = self.transcriber.transcribe(audio).await?;
        info!("transcribed encounter ({} chars)", transcript.len());
        self.record_transcript(log, transcript).await
    }

    /// Run the pipeline from an already-transcribed encounter.
    pub async fn record_transcript(
        &self,
        log: &mut RecordLog,
        transcript: String,
    ) -> Result<IntakeSummary, AssistantError> {
        let summary = self.summarizer.summarize(&transcript).await?;
        let fields = extract_patient_fields(&summary);
        let record = log.append(fields, transcript, summary)?;

        info!(
            "persisted encounter record (id={}, patient={})",
            record.id, record.fields.patient_name
        );

        Ok(IntakeSummary {
            id: record.id,
            name: record.fields.patient_name.to_string(),
            age: record.fields.age.to_string(),
            gender: record.fields.gender.to_string(),
            disease: record.fields.estimated_disease.to_string(),
            symptoms: record.fields.symptoms.to_string(),
        })
    }
}
