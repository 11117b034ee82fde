// Status bar widget: participant count and run status.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::RunStatus;
use crate::roster::MAX_PARTICIPANTS;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [status indicator] [participant counter] [status label]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (dot, dot_color) = status_indicator(state.status);

    let spans = vec![
        Span::styled(format!(" {} ", dot), Style::default().fg(dot_color)),
        Span::styled(
            format!("{}/{} ready", state.participant_count, MAX_PARTICIPANTS),
            Style::default().fg(Color::White),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(
            status_label(state.status),
            Style::default()
                .fg(dot_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Return the status dot character and its color.
pub fn status_indicator(status: RunStatus) -> (&'static str, Color) {
    match status {
        RunStatus::Waiting => ("●", Color::DarkGray),
        RunStatus::Shuffling => ("●", Color::Yellow),
        RunStatus::Locked => ("●", Color::Green),
    }
}

/// Return the label for a run status.
pub fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Waiting => "Waiting",
        RunStatus::Shuffling => "Shuffling…",
        RunStatus::Locked => "Locked",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
