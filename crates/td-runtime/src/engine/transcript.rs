//! Display log construction. Entries are only ever appended; a new scenario
//! attempt replaces the whole log with a fresh seed.

use td_core::{DisplayScheme, Scenario, Step, TranscriptEntry};

/// Banner, briefing, and first prompt. The banner is an error-kind entry.
pub fn seed(scenario: &Scenario, scheme: &DisplayScheme) -> Vec<TranscriptEntry> {
    let first_prompt = scenario
        .steps
        .first()
        .map(|step| step.prompt.clone())
        .unwrap_or_default();
    vec![
        TranscriptEntry::error(banner_text(scenario, scheme)),
        TranscriptEntry::output(scenario.description.clone()),
        TranscriptEntry::prompt(first_prompt),
    ]
}

pub fn append(
    transcript: &mut Vec<TranscriptEntry>,
    entries: impl IntoIterator<Item = TranscriptEntry>,
) {
    transcript.extend(entries);
}

pub fn banner_text(scenario: &Scenario, scheme: &DisplayScheme) -> String {
    format!(
        "{} [{}] {}",
        scheme.banner_icon, scenario.classification, scenario.title
    )
}

pub fn input_echo_text(trimmed_input: &str) -> String {
    format!("$ {}", trimmed_input)
}

pub fn rejection_text(step: &Step) -> String {
    format!("Command not effective. Hint: {}", step.hint)
}

pub fn completion_text(
    scheme: &DisplayScheme,
    total_commands: usize,
    failed_attempts: u32,
) -> String {
    format!(
        "\n━━━ {} ━━━\nTotal commands: {} | Failed attempts: {}",
        scheme.completion_heading, total_commands, failed_attempts
    )
}
