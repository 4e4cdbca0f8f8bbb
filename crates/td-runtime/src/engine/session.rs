use super::transcript;
use super::{ChallengeEngine, SubmitOutcome};

impl ChallengeEngine {
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let scenario_index = self.state.scenario_index;
        let step_index = self.state.step_index;
        let outcome = self.evaluate(text);
        tracing::debug!(
            scenario = scenario_index,
            step = step_index,
            ?outcome,
            failed_attempts = self.state.failed_attempts,
            "submission evaluated"
        );
        outcome
    }

    /// Restarts the current scenario from its first step.
    pub fn reset(&mut self) {
        self.load_scenario(self.state.scenario_index);
        tracing::info!(scenario = self.state.scenario_index, "scenario reset");
    }

    /// Moves to the next scenario, wrapping after the last one. Allowed before
    /// completion too, in which case the current attempt is abandoned.
    pub fn advance_scenario(&mut self) {
        let next = (self.state.scenario_index + 1) % self.catalog.len();
        if !self.state.completed {
            tracing::debug!(
                scenario = self.state.scenario_index,
                "advancing before completion"
            );
        }
        self.load_scenario(next);
        tracing::info!(scenario = next, "scenario advanced");
    }

    fn load_scenario(&mut self, scenario_index: usize) {
        self.state.scenario_index = scenario_index;
        self.state.step_index = 0;
        self.state.completed = false;
        self.state.failed_attempts = 0;
        self.state.transcript =
            transcript::seed(&self.catalog.scenarios[scenario_index], &self.scheme);
    }
}
