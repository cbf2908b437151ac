use crate::game::{Board, Cell};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn cell_span(cell: Cell, highlighted: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", Color::Red),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
    };
    let mut style = Style::default().fg(color);
    if highlighted {
        style = style.bg(Color::Rgb(30, 30, 60));
    }
    Span::styled(symbol, style)
}

/// Board lines, top row first, with column numbers above and a selection
/// marker below. Works for any shape, including after a rotation.
pub fn board_lines(board: &Board, selected_column: Option<usize>) -> Vec<Line<'static>> {
    let cols = board.cols();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    let mut numbers = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            numbers.push(Span::raw(label));
        }
    }
    lines.push(Line::from(numbers));

    let bar = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{bar}╗")));

    for row in (0..board.rows()).rev() {
        let mut spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            spans.push(cell_span(board.get(row, col), Some(col) == selected_column));
        }
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  ╚{bar}╝")));

    let mut marker = vec![Span::raw("   ")];
    for col in 0..cols {
        if Some(col) == selected_column {
            marker.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            marker.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(marker));

    lines
}
