// Roster panel widget: the ten "Person N" slot rows.
//
// Shows each slot's text (or a dim placeholder), highlights the selected
// row, marks the edit cursor, and appends a hint line while fewer than two
// participants exist.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::roster::MIN_PARTICIPANTS;
use crate::tui::ViewState;

const PLACEHOLDER: &str = "Enter a name";

/// Render the roster panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut lines: Vec<Line> = state
        .slots
        .iter()
        .enumerate()
        .map(|(index, name)| {
            slot_line(
                index,
                name,
                index == state.selected_slot,
                state.edit_mode && index == state.selected_slot,
            )
        })
        .collect();

    if state.participant_count < MIN_PARTICIPANTS {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            " Add at least two names to enable the shuffle.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Participants"),
    );
    frame.render_widget(paragraph, area);
}

/// Build one slot row.
///
/// The selected row gets a marker and a highlight; the editing row also gets
/// a cursor after the text. Empty slots show a dim placeholder.
fn slot_line(index: usize, name: &str, selected: bool, editing: bool) -> Line<'static> {
    let marker = if selected { "▸" } else { " " };
    let row_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!(" {marker} "), row_style),
        Span::styled(format!("Person {:>2}  ", index + 1), row_style),
    ];

    if name.is_empty() && !editing {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(name.to_string(), row_style));
    }

    if editing {
        spans.push(Span::styled(
            "▏",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
