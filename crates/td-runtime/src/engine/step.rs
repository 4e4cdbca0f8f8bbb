use td_core::TranscriptEntry;

use super::transcript;
use super::ChallengeEngine;
use crate::matcher::normalize_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or the scenario is already completed. Nothing changed.
    Ignored,
    Rejected,
    Matched { completed: bool },
}

impl SubmitOutcome {
    pub fn matched(self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

impl ChallengeEngine {
    /// Checks one line against the current step and records the exchange.
    /// A failed attempt never moves the step pointer.
    pub fn evaluate(&mut self, raw_input: &str) -> SubmitOutcome {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() || self.state.completed {
            return SubmitOutcome::Ignored;
        }

        let normalized = normalize_input(trimmed);
        let scenario = &self.catalog.scenarios[self.state.scenario_index];
        let step = &scenario.steps[self.state.step_index];
        let matched = self
            .matcher
            .matches(&normalized, &step.accepted_commands);

        let mut entries = vec![TranscriptEntry::input_echo(transcript::input_echo_text(
            trimmed,
        ))];

        if !matched {
            self.state.failed_attempts += 1;
            entries.push(TranscriptEntry::error(transcript::rejection_text(step)));
            transcript::append(&mut self.state.transcript, entries);
            return SubmitOutcome::Rejected;
        }

        entries.push(TranscriptEntry::output(step.output.clone()));
        entries.push(TranscriptEntry::success(step.success_message.clone()));

        let next_index = self.state.step_index + 1;
        let completed = next_index >= scenario.steps.len();
        if completed {
            entries.push(TranscriptEntry::success(transcript::completion_text(
                &self.scheme,
                scenario.steps.len(),
                self.state.failed_attempts,
            )));
            self.state.completed = true;
        } else {
            entries.push(TranscriptEntry::prompt(
                scenario.steps[next_index].prompt.clone(),
            ));
            self.state.step_index = next_index;
        }

        transcript::append(&mut self.state.transcript, entries);
        SubmitOutcome::Matched { completed }
    }
}
