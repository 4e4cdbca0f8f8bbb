#![cfg(not(coverage))]

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use td_core::EntryKind;
use td_runtime::ChallengeEngine;

use crate::tui_state::TuiUiState;

const ELLIPSIS: &str = "…";
const KEYS_TEXT: &str =
    "keys: type+enter submit | tab skip | ctrl-r reset | ctrl-n next | f1 help | esc quit";
const HELP_TEXT: &str =
    "a command counts when it contains any accepted command for the step, ignoring case.";

pub(crate) fn render_tui(frame: &mut Frame<'_>, ui: &TuiUiState, engine: &ChallengeEngine) {
    let terminal_width = frame.area().width as usize;
    let terminal_rows = frame.area().height as usize;
    let content_width = (terminal_width.saturating_sub(2)).max(16);

    let progress = engine.progress();
    let scheme = engine.scheme();
    let scenario = engine.current_scenario();
    let header_text = format!(
        "{} | [{}] {} | step {}/{} | {}/{} {}",
        scheme.widget_title,
        scenario.classification,
        scenario.title,
        progress.step_index + 1,
        progress.total_steps,
        progress.scenario_index + 1,
        progress.total_scenarios,
        scheme.unit_label
    );

    let mut wrapped_rows: Vec<(String, Style)> = Vec::new();
    for entry in ui.visible_entries() {
        let style = entry_style(entry.kind);
        if entry.kind == EntryKind::Prompt {
            wrapped_rows.push((String::new(), Style::default()));
        }
        for raw_line in entry.text.split('\n') {
            for row in wrap_line_to_width(raw_line, content_width) {
                wrapped_rows.push((row, style));
            }
        }
    }

    let mut reserved_rows = 1usize + 1usize + 1usize + 1usize + 1usize;
    if ui.help_visible {
        reserved_rows += 1;
    }
    let visible_text_rows = terminal_rows.saturating_sub(reserved_rows).max(1);
    let clipped_rows = if wrapped_rows.len() <= visible_text_rows {
        wrapped_rows
    } else {
        wrapped_rows[wrapped_rows.len() - visible_text_rows..].to_vec()
    };

    let mut lines_out: Vec<Line<'_>> = Vec::new();
    lines_out.push(Line::from(Span::styled(
        truncate_to_width(&header_text, content_width),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (row, style) in clipped_rows {
        lines_out.push(Line::from(Span::styled(row, style)));
    }
    lines_out.push(Line::from(Span::styled(
        "─".repeat(content_width),
        Style::default().fg(Color::Gray),
    )));
    if ui.completed {
        lines_out.push(Line::from(Span::styled(
            truncate_to_width("[done] enter: next scenario", content_width),
            Style::default().fg(Color::Green),
        )));
    } else {
        let visible_input = tail_to_width(&ui.input_buffer, content_width.saturating_sub(3));
        lines_out.push(Line::from(vec![
            Span::styled("$ ", Style::default().fg(Color::Cyan)),
            Span::raw(visible_input),
            Span::styled("_", Style::default().fg(Color::Gray)),
        ]));
    }
    lines_out.push(Line::from(Span::styled(
        truncate_to_width(KEYS_TEXT, content_width),
        Style::default().fg(Color::Yellow),
    )));
    lines_out.push(Line::from(Span::styled(
        truncate_to_width(&format!("status: {}", ui.status), content_width),
        Style::default().fg(Color::Gray),
    )));
    if ui.help_visible {
        lines_out.push(Line::from(Span::styled(
            truncate_to_width(HELP_TEXT, content_width),
            Style::default().fg(Color::Magenta),
        )));
    }

    let paragraph = Paragraph::new(lines_out).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, frame.area());
}

fn entry_style(kind: EntryKind) -> Style {
    match kind {
        EntryKind::Error => Style::default().fg(Color::Red),
        EntryKind::Success => Style::default().fg(Color::Green),
        EntryKind::Prompt => Style::default().fg(Color::Yellow),
        EntryKind::InputEcho => Style::default().fg(Color::Cyan),
        EntryKind::Output => Style::default().fg(Color::Gray),
    }
}

fn truncate_to_width(value: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let chars = value.chars().collect::<Vec<_>>();
    if chars.len() <= width {
        return value.to_string();
    }
    if width == 1 {
        return ELLIPSIS.to_string();
    }
    let mut out = chars.into_iter().take(width - 1).collect::<String>();
    out.push_str(ELLIPSIS);
    out
}

/// Keeps the end of long input visible while typing.
fn tail_to_width(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        return value.to_string();
    }
    value.chars().skip(count - width).collect()
}

fn wrap_line_to_width(value: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let chars = value.chars().collect::<Vec<_>>();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tui_render_tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::cli_test_support::*;
    use crate::{create_engine_for_session, started_update, DomainArg};

    #[test]
    fn width_helpers_truncate_and_wrap() {
        assert_eq!(truncate_to_width("abcdef", 0), "");
        assert_eq!(truncate_to_width("abcdef", 1), ELLIPSIS);
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");

        assert_eq!(wrap_line_to_width("", 4), vec![String::new()]);
        assert_eq!(
            wrap_line_to_width("abcdefghij", 4),
            vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
        );

        assert_eq!(tail_to_width("docker ps", 2), "ps");
        assert_eq!(tail_to_width("ps", 8), "ps");
    }

    #[test]
    fn render_tui_draws_header_and_transcript() {
        let engine = create_engine_for_session(&session_args(DomainArg::Incident))
            .expect("engine should build");
        let mut ui = TuiUiState {
            status: "ready".to_string(),
            ..TuiUiState::default()
        };
        ui.apply_update(started_update(&engine), engine.is_completed());
        ui.skip_typewriter();
        ui.input_buffer.push_str("kubectl");

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
        terminal
            .draw(|frame| render_tui(frame, &ui, &engine))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer().clone();
        let rows = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>();
        assert!(rows[0].starts_with("Incident Response | [P1]"));
        assert!(rows.iter().any(|row| row.contains("$ kubectl_")));
        assert!(rows.iter().any(|row| row.contains("status: ready")));
    }
}
