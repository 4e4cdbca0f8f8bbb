use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use td_runtime::ChallengeEngine;

use crate::tui_state::TuiUiState;
use crate::{apply_session_command, SessionCommand, SessionEvent};

/// Applies one key press. Returns true when the widget should close.
pub(crate) fn handle_key(key: KeyEvent, engine: &mut ChallengeEngine, ui: &mut TuiUiState) -> bool {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (control && key.code == KeyCode::Char('c')) {
        return true;
    }

    match key.code {
        KeyCode::F(1) => {
            ui.help_visible = !ui.help_visible;
            return false;
        }
        KeyCode::Tab => {
            ui.skip_typewriter();
            return false;
        }
        KeyCode::Char('r') if control => {
            run_command(SessionCommand::Reset, engine, ui);
            return false;
        }
        KeyCode::Char('n') if control => {
            run_command(SessionCommand::Next, engine, ui);
            return false;
        }
        _ => {}
    }

    match key.code {
        KeyCode::Backspace | KeyCode::Delete => {
            ui.input_buffer.pop();
        }
        KeyCode::Enter => {
            if ui.typing_in_progress() {
                ui.status = "output streaming... (tab to skip)".to_string();
                return false;
            }
            if ui.completed {
                run_command(SessionCommand::Next, engine, ui);
                return false;
            }
            let input = std::mem::take(&mut ui.input_buffer);
            run_command(SessionCommand::Submit(input.as_str()), engine, ui);
        }
        KeyCode::Char(ch) => {
            if !ui.completed && !control && !key.modifiers.contains(KeyModifiers::ALT) {
                ui.input_buffer.push(ch);
            }
        }
        _ => {}
    }

    false
}

fn run_command(command: SessionCommand<'_>, engine: &mut ChallengeEngine, ui: &mut TuiUiState) {
    let update = apply_session_command(engine, command);
    ui.status = match update.event {
        SessionEvent::Matched if engine.is_completed() => "completed, enter for next".to_string(),
        SessionEvent::Matched => "accepted".to_string(),
        SessionEvent::Rejected => format!("not effective ({} failed)", engine.progress().failed_attempts),
        SessionEvent::Ignored => "nothing to submit".to_string(),
        SessionEvent::Reset => "restarted".to_string(),
        SessionEvent::Advanced => "next scenario".to_string(),
        _ => ui.status.clone(),
    };
    ui.apply_update(update, engine.is_completed());
}
