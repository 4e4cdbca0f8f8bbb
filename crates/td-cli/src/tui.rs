#[cfg(coverage)]
pub(super) fn run_tui_ratatui_mode(
    engine: &mut td_runtime::ChallengeEngine,
) -> Result<i32, td_core::TermDrillError> {
    super::run_tui_line_mode(engine)
}

#[cfg(not(coverage))]
mod rich {
    use std::io;
    use std::time::{Duration, Instant};

    use crossterm::event::{self, Event, KeyEventKind};
    use crossterm::terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    };
    use crossterm::ExecutableCommand;
    use ratatui::backend::CrosstermBackend;
    use ratatui::Terminal;
    use td_core::TermDrillError;
    use td_runtime::ChallengeEngine;

    use crate::tui_actions::handle_key;
    use crate::tui_render::render_tui;
    use crate::tui_state::TuiUiState;
    use crate::{map_tui_io, started_update};

    const TYPEWRITER_TICK_MS: u64 = 16;
    const TYPEWRITER_CHARS_PER_TICK: usize = 3;

    struct TuiTerminal {
        terminal: Terminal<CrosstermBackend<io::Stdout>>,
    }

    impl TuiTerminal {
        fn new() -> Result<Self, TermDrillError> {
            enable_raw_mode().map_err(map_tui_io)?;
            io::stdout()
                .execute(EnterAlternateScreen)
                .map_err(map_tui_io)?;
            let backend = CrosstermBackend::new(io::stdout());
            let terminal = Terminal::new(backend).map_err(map_tui_io)?;
            Ok(Self { terminal })
        }

        fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
            &mut self.terminal
        }
    }

    impl Drop for TuiTerminal {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let _ = io::stdout().execute(LeaveAlternateScreen);
        }
    }

    pub(super) fn run_tui_ratatui_mode(engine: &mut ChallengeEngine) -> Result<i32, TermDrillError> {
        let mut terminal = TuiTerminal::new()?;
        let mut ui = TuiUiState {
            status: "ready".to_string(),
            ..TuiUiState::default()
        };
        ui.apply_update(started_update(engine), engine.is_completed());

        let tick = Duration::from_millis(TYPEWRITER_TICK_MS);
        let mut last_tick = Instant::now();

        loop {
            terminal
                .terminal_mut()
                .draw(|frame| render_tui(frame, &ui, engine))
                .map_err(map_tui_io)?;

            if last_tick.elapsed() >= tick && ui.advance_typewriter(TYPEWRITER_CHARS_PER_TICK) {
                last_tick = Instant::now();
            }

            let timeout = tick.saturating_sub(last_tick.elapsed());
            if !event::poll(timeout).map_err(map_tui_io)? {
                continue;
            }

            if let Event::Key(key) = event::read().map_err(map_tui_io)? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(key, engine, &mut ui) {
                    break;
                }
            }
        }

        tracing::debug!(
            scenario = engine.progress().scenario_index,
            "tui session closed"
        );
        Ok(0)
    }
}

#[cfg(not(coverage))]
pub(super) fn run_tui_ratatui_mode(
    engine: &mut td_runtime::ChallengeEngine,
) -> Result<i32, td_core::TermDrillError> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return super::run_tui_line_mode(engine);
    }
    rich::run_tui_ratatui_mode(engine)
}
