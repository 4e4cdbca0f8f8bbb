use td_core::TranscriptEntry;
use td_runtime::SubmitOutcome;

pub(crate) const SESSION_COMMANDS_HELP: &str = "commands: :help :reset :next :progress :quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionCommand<'a> {
    Submit(&'a str),
    Reset,
    Next,
    Progress,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionEvent {
    Started,
    Matched,
    Rejected,
    Ignored,
    Reset,
    Advanced,
    Progress,
    Help,
    Quit,
}

impl SessionEvent {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Started => "STARTED",
            Self::Matched => "MATCHED",
            Self::Rejected => "REJECTED",
            Self::Ignored => "IGNORED",
            Self::Reset => "RESET",
            Self::Advanced => "ADVANCED",
            Self::Progress => "PROGRESS",
            Self::Help => "HELP",
            Self::Quit => "QUIT",
        }
    }
}

impl From<SubmitOutcome> for SessionEvent {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Ignored => Self::Ignored,
            SubmitOutcome::Rejected => Self::Rejected,
            SubmitOutcome::Matched { .. } => Self::Matched,
        }
    }
}

/// Result of one controller command: either entries appended to the
/// transcript, or (`replaced`) the full transcript after a reset/advance.
#[derive(Debug, Clone)]
pub(crate) struct SessionUpdate {
    pub(crate) event: SessionEvent,
    pub(crate) replaced: bool,
    pub(crate) entries: Vec<TranscriptEntry>,
}
