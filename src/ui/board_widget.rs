use crate::game::{Board, Cell, Symbol};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::X => Color::Red,
        Symbol::O => Color::Yellow,
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Player(symbol) => Span::styled(
            format!(" {} ", symbol),
            Style::default()
                .fg(symbol_color(symbol))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Board framed with column numbers above and a selector arrow below.
/// Pass `None` to hide the selector, e.g. once the match is over.
pub fn board_lines(board: &Board, selected_column: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.columns() {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.columns() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..board.columns() {
            row_spans.push(cell_span(board.get(row, col)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.columns() {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

pub fn render_board(frame: &mut Frame, board: &Board, selected_column: Option<usize>, area: Rect) {
    let widget = Paragraph::new(board_lines(board, selected_column)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
