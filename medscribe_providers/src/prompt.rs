//! Summarization prompt: turn a raw encounter transcript into summary text
//! carrying the six labeled patient fields.

/// User prompt template; placeholder is replaced with the transcript.
const SUMMARY_TEMPLATE: &str = "Summarize the following medical text and extract patient details:
- Patient Name
- Age
- Gender
- Estimated Disease
- Symptoms
- Patient History

{transcript}";

/// Build the summarization prompt for the given transcript.
#[must_use]
pub fn summary_prompt(transcript: &str) -> String {
    SUMMARY_TEMPLATE.replace("{transcript}", transcript)
}
