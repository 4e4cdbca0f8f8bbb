use std::io::{self, BufRead, Write};

use td_core::TermDrillError;
use td_runtime::ChallengeEngine;

use crate::{
    apply_session_command, create_engine_for_session, emit_update, map_cli_io,
    parse_session_command, started_update, AgentArgs, SessionEvent,
};

pub(super) fn run_agent(args: AgentArgs) -> Result<i32, TermDrillError> {
    let mut engine = create_engine_for_session(&args.session)?;
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run_agent_with_io(&mut engine, &mut reader, &mut writer)
}

/// Plays one session over a line protocol until `:quit` or end of input.
pub(crate) fn run_agent_with_io(
    engine: &mut ChallengeEngine,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, TermDrillError> {
    writeln!(writer, "RESULT:OK").map_err(map_cli_io)?;
    emit_update(writer, &started_update(engine), &engine.progress())?;

    while let Some(raw) = read_command_line(reader)? {
        let update = apply_session_command(engine, parse_session_command(&raw));
        emit_update(writer, &update, &engine.progress())?;
        if update.event == SessionEvent::Quit {
            break;
        }
    }

    Ok(0)
}

fn read_command_line(reader: &mut dyn BufRead) -> Result<Option<String>, TermDrillError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(map_cli_io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
