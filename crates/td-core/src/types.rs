use std::fmt;

use serde::{Deserialize, Serialize};

/// Display-only tag attached to a scenario. Tooling catalogs use difficulty
/// levels, the incident catalog uses severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Intermediate,
    Advanced,
    P1,
    P2,
    P3,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub prompt: String,
    pub accepted_commands: Vec<String>,
    pub hint: String,
    pub success_message: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub title: String,
    #[serde(alias = "level", alias = "severity")]
    pub classification: Classification,
    pub description: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Docker,
    Kubernetes,
    Incident,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Docker, Domain::Kubernetes, Domain::Incident];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Kubernetes => "kubernetes",
            Self::Incident => "incident",
        }
    }

    pub fn scheme(self) -> DisplayScheme {
        match self {
            Self::Docker => {
                DisplayScheme::new("🐳", "Docker CLI Exercises", "Task Completed", "scenarios")
            }
            Self::Kubernetes => {
                DisplayScheme::new("☸️", "Kubernetes Exercises", "Task Completed", "scenarios")
            }
            Self::Incident => {
                DisplayScheme::new("🚨", "Incident Response", "Incident Resolved", "incidents")
            }
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels a widget skin contributes to the transcript and the surrounding chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayScheme {
    pub banner_icon: String,
    pub widget_title: String,
    pub completion_heading: String,
    pub unit_label: String,
}

impl DisplayScheme {
    pub fn new(
        banner_icon: impl Into<String>,
        widget_title: impl Into<String>,
        completion_heading: impl Into<String>,
        unit_label: impl Into<String>,
    ) -> Self {
        Self {
            banner_icon: banner_icon.into(),
            widget_title: widget_title.into(),
            completion_heading: completion_heading.into(),
            unit_label: unit_label.into(),
        }
    }
}

impl Default for DisplayScheme {
    fn default() -> Self {
        Self::new("▶", "Command Challenges", "Task Completed", "scenarios")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub domain: Option<Domain>,
    #[serde(default)]
    pub title: Option<String>,
    pub scenarios: Vec<Scenario>,
}

impl Catalog {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            domain: None,
            title: None,
            scenarios,
        }
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scheme of the declared domain, or the generic one for ad-hoc catalogs.
    pub fn display_scheme(&self) -> DisplayScheme {
        let mut scheme = self.domain.map(Domain::scheme).unwrap_or_default();
        if let Some(title) = &self.title {
            scheme.widget_title = title.clone();
        }
        scheme
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    Prompt,
    #[serde(rename = "input")]
    InputEcho,
    Output,
    Error,
    Success,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::InputEcho => "input",
            Self::Output => "output",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Prompt, text)
    }

    pub fn input_echo(text: impl Into<String>) -> Self {
        Self::new(EntryKind::InputEcho, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Success, text)
    }
}

/// Session-scoped mutable state of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineState {
    pub scenario_index: usize,
    pub step_index: usize,
    pub transcript: Vec<TranscriptEntry>,
    pub completed: bool,
    pub failed_attempts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub scenario_index: usize,
    pub total_scenarios: usize,
    pub step_index: usize,
    pub total_steps: usize,
    pub failed_attempts: u32,
    pub completed: bool,
}
