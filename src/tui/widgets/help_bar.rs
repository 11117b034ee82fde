// Help bar widget: keyboard shortcut hints for the current mode.
//
// In normal mode each action hint reflects its enabled flag from the app
// snapshot: available actions render normally, unavailable ones are dimmed
// (the app ignores them anyway; this mirrors that).

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(help_spans(state)))
        .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Build the hint spans for the active input mode.
pub fn help_spans(state: &ViewState) -> Vec<Span<'static>> {
    if state.confirm_quit {
        return vec![Span::styled(
            " y:Quit | n/Esc:Cancel",
            Style::default().fg(Color::White),
        )];
    }
    if state.edit_mode {
        return vec![Span::styled(
            " Type to edit | Backspace:Delete | Tab:Next slot | Enter/Esc:Done",
            Style::default().fg(Color::White),
        )];
    }

    let mut spans = vec![Span::styled(
        " ↑/↓:Select | Enter:Edit",
        Style::default().fg(Color::White),
    )];
    spans.push(action_span(" | s:Shuffle", state.can_shuffle));
    spans.push(action_span(" | r:Reset ranking", state.can_reset_ranking));
    spans.push(action_span(" | R:Reset names", state.can_reset_all));
    spans.push(Span::styled(
        " | q:Quit",
        Style::default().fg(Color::White),
    ));
    spans
}

/// A single action hint, dimmed when the action is currently unavailable.
fn action_span(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(label, Style::default().fg(Color::White))
    } else {
        Span::styled(
            label,
            Style::default().fg(Color::White).add_modifier(Modifier::DIM),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
