use std::io::{self, BufRead, Write};

use td_core::{EntryKind, TermDrillError, TranscriptEntry};
use td_runtime::ChallengeEngine;

use crate::{
    apply_session_command, map_tui_io, parse_session_command, SessionEvent,
    SESSION_COMMANDS_HELP,
};

pub(crate) fn run_tui_line_mode(engine: &mut ChallengeEngine) -> Result<i32, TermDrillError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    run_tui_line_mode_with_io(engine, &mut reader, &mut writer)
}

pub(crate) fn run_tui_line_mode_with_io(
    engine: &mut ChallengeEngine,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, TermDrillError> {
    writeln!(writer, "{}", engine.scheme().widget_title).map_err(map_tui_io)?;
    writeln!(writer, "{}", SESSION_COMMANDS_HELP).map_err(map_tui_io)?;
    render_entries(writer, engine.transcript())?;

    loop {
        let Some(raw) = prompt_input_from(&input_prefix(engine), reader, writer)? else {
            return Ok(0);
        };
        let update = apply_session_command(engine, parse_session_command(&raw));
        match update.event {
            SessionEvent::Quit => {
                writeln!(writer, "bye").map_err(map_tui_io)?;
                return Ok(0);
            }
            SessionEvent::Help => {
                writeln!(writer, "{}", SESSION_COMMANDS_HELP).map_err(map_tui_io)?;
            }
            SessionEvent::Progress => {
                writeln!(writer, "{}", progress_summary(engine)).map_err(map_tui_io)?;
            }
            SessionEvent::Reset | SessionEvent::Advanced => {
                writeln!(writer).map_err(map_tui_io)?;
                render_entries(writer, &update.entries)?;
            }
            SessionEvent::Matched if engine.is_completed() => {
                render_entries(writer, &update.entries)?;
                writeln!(writer, "{} (:next to continue)", progress_summary(engine))
                    .map_err(map_tui_io)?;
            }
            _ => render_entries(writer, &update.entries)?,
        }
    }
}

fn input_prefix(engine: &ChallengeEngine) -> String {
    let progress = engine.progress();
    if progress.completed {
        return "[done] > ".to_string();
    }
    format!("[{}/{}] $ ", progress.step_index + 1, progress.total_steps)
}

fn progress_summary(engine: &ChallengeEngine) -> String {
    let progress = engine.progress();
    let state = if progress.completed {
        "completed"
    } else {
        "in progress"
    };
    format!(
        "{} {}/{} | step {}/{} | failed attempts {} | {}",
        engine.scheme().unit_label,
        progress.scenario_index + 1,
        progress.total_scenarios,
        progress.step_index + 1,
        progress.total_steps,
        progress.failed_attempts,
        state
    )
}

fn render_entries(
    writer: &mut dyn Write,
    entries: &[TranscriptEntry],
) -> Result<(), TermDrillError> {
    for entry in entries {
        match entry.kind {
            EntryKind::Prompt => {
                writeln!(writer).map_err(map_tui_io)?;
                writeln!(writer, "» {}", entry.text).map_err(map_tui_io)?;
            }
            _ => writeln!(writer, "{}", entry.text).map_err(map_tui_io)?,
        }
    }
    Ok(())
}

/// `None` at end of input.
pub(crate) fn prompt_input_from(
    prefix: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<Option<String>, TermDrillError> {
    write!(writer, "{}", prefix).map_err(map_tui_io)?;
    writer.flush().map_err(map_tui_io)?;
    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(map_tui_io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
