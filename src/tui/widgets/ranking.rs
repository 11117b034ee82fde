// Ranking panel widget: the shuffled line.
//
// Shows the display order as a numbered list. Once a run completes, entries
// matching the locked final order at the same position carry a FINAL pill.
// While the order is empty a placeholder message is shown instead.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the ranking panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title("The Line");

    if state.display_order.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            " Rankings will appear here after you run the shuffle.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let lines: Vec<Line> = state
        .display_order
        .iter()
        .enumerate()
        .map(|(index, name)| entry_line(index, name, is_final(state, index, name)))
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Whether the entry at `index` is locked: the run is over and the final
/// order holds the same name at the same position.
fn is_final(state: &ViewState, index: usize, name: &str) -> bool {
    !state.shuffling && state.final_order.get(index).is_some_and(|n| n == name)
}

/// Build one ranking row: position, name, and the FINAL pill when locked.
fn entry_line(index: usize, name: &str, locked: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {:>2}. ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(name.to_string(), Style::default().fg(Color::White)),
    ];
    if locked {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            " FINAL ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
