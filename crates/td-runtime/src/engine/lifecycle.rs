use std::sync::Arc;

use td_catalog::validate_catalog;
use td_core::{
    Catalog, DisplayScheme, EngineState, Progress, Scenario, Step, TermDrillError,
    TranscriptEntry,
};

use super::transcript;
use crate::matcher::{CommandMatcher, SubstringMatcher};

#[derive(Clone)]
pub struct ChallengeEngineOptions {
    pub catalog: Catalog,
    /// Falls back to the catalog's own scheme when absent.
    pub scheme: Option<DisplayScheme>,
    pub matcher: Option<Arc<dyn CommandMatcher>>,
}

impl ChallengeEngineOptions {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            scheme: None,
            matcher: None,
        }
    }
}

/// One widget instance: a catalog it walks through and the state of the
/// current attempt. Every transition is total; misuse is a no-op.
pub struct ChallengeEngine {
    pub(super) catalog: Catalog,
    pub(super) scheme: DisplayScheme,
    pub(super) matcher: Arc<dyn CommandMatcher>,
    pub(super) state: EngineState,
}

impl ChallengeEngine {
    pub fn new(options: ChallengeEngineOptions) -> Result<Self, TermDrillError> {
        validate_catalog(&options.catalog)?;

        let scheme = options
            .scheme
            .unwrap_or_else(|| options.catalog.display_scheme());
        let matcher: Arc<dyn CommandMatcher> = match options.matcher {
            Some(matcher) => matcher,
            None => Arc::new(SubstringMatcher),
        };
        let state = EngineState {
            scenario_index: 0,
            step_index: 0,
            transcript: transcript::seed(&options.catalog.scenarios[0], &scheme),
            completed: false,
            failed_attempts: 0,
        };

        tracing::debug!(
            scenarios = options.catalog.len(),
            matcher = matcher.name(),
            "challenge engine created"
        );

        Ok(Self {
            catalog: options.catalog,
            scheme,
            matcher,
            state,
        })
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.state.transcript
    }

    /// Entries appended after the first `start` ones; empty when the log was
    /// replaced by something shorter.
    pub fn transcript_since(&self, start: usize) -> &[TranscriptEntry] {
        self.state.transcript.get(start..).unwrap_or(&[])
    }

    pub fn progress(&self) -> Progress {
        Progress {
            scenario_index: self.state.scenario_index,
            total_scenarios: self.catalog.len(),
            step_index: self.state.step_index,
            total_steps: self.current_scenario().steps.len(),
            failed_attempts: self.state.failed_attempts,
            completed: self.state.completed,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state.completed
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scheme(&self) -> &DisplayScheme {
        &self.scheme
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    pub fn current_scenario(&self) -> &Scenario {
        &self.catalog.scenarios[self.state.scenario_index]
    }

    pub fn current_step(&self) -> &Step {
        &self.current_scenario().steps[self.state.step_index]
    }
}
