use std::sync::Arc;

use td_api::{create_engine, CreateEngineOptions};
use td_core::{Progress, TermDrillError};
use td_runtime::{ChallengeEngine, CommandMatcher, SubstringMatcher, TokenMatcher};

use crate::{
    load_catalog_file, MatcherArg, SessionArgs, SessionCommand, SessionEvent, SessionUpdate,
};

pub(crate) fn create_engine_for_session(
    args: &SessionArgs,
) -> Result<ChallengeEngine, TermDrillError> {
    let catalog_json = match &args.catalog {
        Some(path) => Some(load_catalog_file(path)?),
        None => None,
    };
    let matcher: Arc<dyn CommandMatcher> = match args.matcher {
        MatcherArg::Substring => Arc::new(SubstringMatcher),
        MatcherArg::Token => Arc::new(TokenMatcher),
    };
    create_engine(CreateEngineOptions {
        domain: Some(args.domain.into()),
        catalog_json,
        scheme: None,
        matcher: Some(matcher),
    })
}

pub(crate) fn parse_session_command(raw: &str) -> SessionCommand<'_> {
    match raw.trim() {
        ":reset" => SessionCommand::Reset,
        ":next" => SessionCommand::Next,
        ":progress" => SessionCommand::Progress,
        ":help" => SessionCommand::Help,
        ":quit" => SessionCommand::Quit,
        _ => SessionCommand::Submit(raw),
    }
}

pub(crate) fn apply_session_command(
    engine: &mut ChallengeEngine,
    command: SessionCommand<'_>,
) -> SessionUpdate {
    match command {
        SessionCommand::Submit(text) => {
            let before = engine.transcript().len();
            let outcome = engine.submit(text);
            SessionUpdate {
                event: outcome.into(),
                replaced: false,
                entries: engine.transcript_since(before).to_vec(),
            }
        }
        SessionCommand::Reset => {
            engine.reset();
            replaced_update(engine, SessionEvent::Reset)
        }
        SessionCommand::Next => {
            engine.advance_scenario();
            replaced_update(engine, SessionEvent::Advanced)
        }
        SessionCommand::Progress => empty_update(SessionEvent::Progress),
        SessionCommand::Help => empty_update(SessionEvent::Help),
        SessionCommand::Quit => empty_update(SessionEvent::Quit),
    }
}

pub(crate) fn started_update(engine: &ChallengeEngine) -> SessionUpdate {
    replaced_update(engine, SessionEvent::Started)
}

/// Step and scenario positions are 1-based, as shown to players.
pub(crate) fn progress_line(progress: &Progress) -> String {
    format!(
        "PROGRESS:{}/{}|scenario:{}/{}|failed:{}|completed:{}",
        progress.step_index + 1,
        progress.total_steps,
        progress.scenario_index + 1,
        progress.total_scenarios,
        progress.failed_attempts,
        progress.completed
    )
}

fn replaced_update(engine: &ChallengeEngine, event: SessionEvent) -> SessionUpdate {
    SessionUpdate {
        event,
        replaced: true,
        entries: engine.transcript().to_vec(),
    }
}

fn empty_update(event: SessionEvent) -> SessionUpdate {
    SessionUpdate {
        event,
        replaced: false,
        entries: Vec::new(),
    }
}

#[cfg(test)]
mod session_ops_tests {
    use super::*;
    use crate::cli_test_support::*;
    use crate::DomainArg;
    use td_core::EntryKind;

    #[test]
    fn parse_session_command_recognizes_controller_commands() {
        assert_eq!(parse_session_command(":reset"), SessionCommand::Reset);
        assert_eq!(parse_session_command(" :next "), SessionCommand::Next);
        assert_eq!(parse_session_command(":progress"), SessionCommand::Progress);
        assert_eq!(parse_session_command(":help"), SessionCommand::Help);
        assert_eq!(parse_session_command(":quit"), SessionCommand::Quit);
        assert_eq!(
            parse_session_command("docker ps"),
            SessionCommand::Submit("docker ps")
        );
        assert_eq!(
            parse_session_command(":unknown"),
            SessionCommand::Submit(":unknown")
        );
    }

    #[test]
    fn apply_session_command_reports_appended_entries() {
        let mut engine = create_engine_for_session(&session_args(DomainArg::Docker))
            .expect("engine should build");

        let update = apply_session_command(&mut engine, SessionCommand::Submit("docker ps"));
        assert_eq!(update.event, SessionEvent::Rejected);
        assert!(!update.replaced);
        assert_eq!(
            update
                .entries
                .iter()
                .map(|entry| entry.kind)
                .collect::<Vec<_>>(),
            vec![EntryKind::InputEcho, EntryKind::Error]
        );

        let update =
            apply_session_command(&mut engine, SessionCommand::Submit("docker system df"));
        assert_eq!(update.event, SessionEvent::Matched);
        assert_eq!(update.entries.len(), 4);

        let update = apply_session_command(&mut engine, SessionCommand::Submit("   "));
        assert_eq!(update.event, SessionEvent::Ignored);
        assert!(update.entries.is_empty());
    }

    #[test]
    fn apply_session_command_replaces_transcript_on_reset_and_next() {
        let mut engine = create_engine_for_session(&session_args(DomainArg::Incident))
            .expect("engine should build");
        apply_session_command(&mut engine, SessionCommand::Submit("wrong"));

        let update = apply_session_command(&mut engine, SessionCommand::Reset);
        assert_eq!(update.event, SessionEvent::Reset);
        assert!(update.replaced);
        assert_eq!(update.entries.len(), 3);
        assert_eq!(engine.progress().failed_attempts, 0);

        let update = apply_session_command(&mut engine, SessionCommand::Next);
        assert_eq!(update.event, SessionEvent::Advanced);
        assert_eq!(engine.progress().scenario_index, 1);
        assert!(update.entries[0].text.starts_with("🚨 ["));
    }

    #[test]
    fn create_engine_for_session_reads_catalog_file_and_matcher() {
        let path = temp_path("session.catalog.json");
        write_file(&path, SMALL_CATALOG);
        let mut args = session_args(DomainArg::Kubernetes);
        args.catalog = Some(path.to_string_lossy().to_string());
        args.matcher = MatcherArg::Token;

        let mut engine = create_engine_for_session(&args).expect("engine should build");
        assert_eq!(engine.matcher_name(), "token");
        assert_eq!(engine.catalog().len(), 1);
        assert!(engine.transcript()[0].text.starts_with("☸️ "));
        assert_eq!(
            apply_session_command(&mut engine, SessionCommand::Submit("xdocker ps")).event,
            SessionEvent::Rejected
        );
    }

    #[test]
    fn create_engine_for_session_reports_missing_catalog_file() {
        let mut args = session_args(DomainArg::Docker);
        args.catalog = Some(temp_path("missing.catalog.json").to_string_lossy().to_string());
        let error = match create_engine_for_session(&args) {
            Ok(_) => panic!("missing catalog should fail"),
            Err(error) => error,
        };
        assert_eq!(error.code, "CLI_CATALOG_NOT_FOUND");
    }

    #[test]
    fn progress_line_is_one_based() {
        let engine = create_engine_for_session(&session_args(DomainArg::Docker))
            .expect("engine should build");
        assert_eq!(
            progress_line(&engine.progress()),
            "PROGRESS:1/2|scenario:1/20|failed:0|completed:false"
        );
    }
}
