use crate::game::{Game, GameOutcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    game: &Game,
    selected_column: usize,
    message: &Option<String>,
    seats: [&str; 2],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, seats, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_status(frame, game, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, game: &Game, seats: [&str; 2], area: Rect) {
    let (status, color) = match game.outcome() {
        GameOutcome::InProgress => {
            let player = game.current_player();
            let seat = seats[usize::from(player.id() - 1)];
            (
                format!("Turn {}  |  {} ({}) to move", game.turn_index() + 1, player.name(), seat),
                player_color(player),
            )
        }
        GameOutcome::Winner(player) => (
            format!("Game Over  |  {} wins", player.name()),
            player_color(player),
        ),
        GameOutcome::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let title = format!("Connect Five  |  Red: {}  vs  Yellow: {}", seats[0], seats[1]);
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, selected_column: usize, area: Rect) {
    let selected = (!game.is_terminal()).then_some(selected_column);
    let board_widget = Paragraph::new(board_lines(game.board(), selected)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_status(frame: &mut Frame, game: &Game, area: Rect) {
    let board = game.board();
    let rotation = match game.moves_until_rotation() {
        Some(1) => "rotates after this move!".to_string(),
        Some(n) => format!("rotates in {n} moves"),
        None => "rotation off".to_string(),
    };
    let line = Line::from(vec![
        Span::raw(format!("{}  |  ", game.rotation().label())),
        Span::raw(format!("{}x{}  |  gravity ↓  |  ", board.rows(), board.cols())),
        Span::styled(rotation, Style::default().fg(Color::Cyan)),
    ]);

    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(status, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
