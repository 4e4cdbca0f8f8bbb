use std::io::Write;

use td_core::{Progress, TermDrillError, TranscriptEntry};

use crate::{map_cli_io, map_cli_output_encode, progress_line, SessionUpdate};

pub(crate) fn emit_update(
    writer: &mut dyn Write,
    update: &SessionUpdate,
    progress: &Progress,
) -> Result<(), TermDrillError> {
    writeln!(writer, "EVENT:{}", update.event.as_str()).map_err(map_cli_io)?;
    for entry in &update.entries {
        emit_entry(writer, entry)?;
    }
    writeln!(writer, "{}", progress_line(progress)).map_err(map_cli_io)?;
    writer.flush().map_err(map_cli_io)
}

pub(crate) fn emit_entry(
    writer: &mut dyn Write,
    entry: &TranscriptEntry,
) -> Result<(), TermDrillError> {
    let text_json = serde_json::to_string(&entry.text).map_err(map_cli_output_encode)?;
    writeln!(writer, "ENTRY:{}|{}", entry.kind.as_str(), text_json).map_err(map_cli_io)
}
