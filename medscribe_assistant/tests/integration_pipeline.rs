//! End-to-end intake and responder tests with stub collaborators.

use async_trait::async_trait;
use medscribe_assistant::{Intake, Responder, ResponderConfig};
use medscribe_core::{
    ChatMessage, FieldValue, LLMProvider, LLMResponse, PatientFields, Role, Summarizer,
    Transcriber,
};
use medscribe_store::{KeywordSelector, RecordLog};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

const JOHN_SMITH_SUMMARY: &str = "Patient Name: John Smith\n\
                                  Age: 45\n\
                                  Gender: Male\n\
                                  Estimated Disease: Flu\n\
                                  Symptoms: fever, cough\n\
                                  Patient History: none";

struct StubTranscriber {
    text: String,
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, _audio: &Path) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }
}

struct StubSummarizer {
    summary: String,
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, _transcript: &str) -> anyhow::Result<String> {
        Ok(self.summary.clone())
    }
}

#[derive(Clone)]
struct RecordingChat {
    answer: String,
    last_messages: Arc<Mutex<Vec<ChatMessage>>>,
}

impl RecordingChat {
    fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            last_messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LLMProvider for RecordingChat {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        _model: &str,
        _temperature: f32,
    ) -> anyhow::Result<LLMResponse> {
        *self.last_messages.lock().expect("lock") = messages.to_vec();
        Ok(LLMResponse {
            content: self.answer.clone(),
            usage: None,
        })
    }

    fn default_model(&self) -> &'static str {
        "stub-model"
    }
}

#[tokio::test]
async fn intake_persists_the_extracted_record() {
    let temp = tempdir().expect("tempdir");
    let mut log = RecordLog::open(temp.path().join("patient_log.jsonl")).expect("open");
    let before = log.len();

    let intake = Intake::new(
        StubTranscriber {
            text: "spoken encounter".to_string(),
        },
        StubSummarizer {
            summary: JOHN_SMITH_SUMMARY.to_string(),
        },
    );

    let created = intake
        .record_transcript(&mut log, "spoken encounter".to_string())
        .await
        .expect("intake");

    assert_eq!(created.name, "John Smith");
    assert_eq!(created.age, "45");
    assert_eq!(created.disease, "Flu");
    assert_eq!(log.len(), before + 1);

    let record = &log.records()[log.len() - 1];
    assert_eq!(record.id, created.id);
    assert_eq!(record.raw_input, "spoken encounter");
    assert_eq!(record.summary, JOHN_SMITH_SUMMARY);
    assert_eq!(
        record.fields.patient_name,
        FieldValue::Known("John Smith".to_string())
    );
}

#[tokio::test]
async fn intake_from_audio_runs_the_transcriber_first() {
    let temp = tempdir().expect("tempdir");
    let mut log = RecordLog::open(temp.path().join("patient_log.jsonl")).expect("open");

    let intake = Intake::new(
        StubTranscriber {
            text: "transcribed from wav".to_string(),
        },
        StubSummarizer {
            summary: "Patient Name: Jane Doe".to_string(),
        },
    );

    let created = intake
        .record_file(&mut log, Path::new("unused.wav"))
        .await
        .expect("intake");

    assert_eq!(created.name, "Jane Doe");
    assert_eq!(log.records()[0].raw_input, "transcribed from wav");
}

#[tokio::test]
async fn responder_sends_matching_records_as_context() {
    let temp = tempdir().expect("tempdir");
    let mut log = RecordLog::open(temp.path().join("patient_log.jsonl")).expect("open");

    let fields = PatientFields {
        patient_name: FieldValue::Known("Jane Doe".to_string()),
        estimated_disease: FieldValue::Known("Diabetes".to_string()),
        ..PatientFields::default()
    };
    log.append(fields, "raw".to_string(), "sum".to_string())
        .expect("append");

    let chat = RecordingChat::new("  The patient with diabetes is Jane Doe.  ");
    let responder = Responder::new(
        chat.clone(),
        KeywordSelector::new(),
        ResponderConfig::default(),
    );

    let answer = responder
        .answer("which patient has diabetes", log.records())
        .await
        .expect("answer");

    assert_eq!(answer, "The patient with diabetes is Jane Doe.");

    let messages = chat.last_messages.lock().expect("lock").clone();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, "You are a helpful AI medical assistant.");
    assert_eq!(messages[1].role, Role::User);
    assert!(messages[1].content.contains("Relevant Patient Data:"));
    assert!(messages[1].content.contains("Jane Doe"));
    assert!(
        messages[1]
            .content
            .contains("Question: which patient has diabetes")
    );
}

#[tokio::test]
async fn responder_always_gets_context_from_a_non_empty_store() {
    let temp = tempdir().expect("tempdir");
    let mut log = RecordLog::open(temp.path().join("patient_log.jsonl")).expect("open");

    let fields = PatientFields {
        patient_name: FieldValue::Known("Jane Doe".to_string()),
        ..PatientFields::default()
    };
    log.append(fields, "raw".to_string(), "sum".to_string())
        .expect("append");

    let chat = RecordingChat::new("answer");
    let responder = Responder::new(
        chat.clone(),
        KeywordSelector::new(),
        ResponderConfig::default(),
    );

    responder
        .answer("zzzunmatchable", log.records())
        .await
        .expect("answer");

    let messages = chat.last_messages.lock().expect("lock").clone();
    assert!(
        messages[1].content.contains("Jane Doe"),
        "fallback window must supply the most recent records"
    );
}
