use crate::ai::MoveProvider;
use crate::error::GameError;
use crate::game::{Game, GameOutcome, GameRules, Player, TurnReport};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive game. The human plays one colour; the other seat is either a
/// move provider or, with no provider, a second human at the same keyboard.
pub struct App {
    game: Game,
    human: Player,
    opponent: Option<Box<dyn MoveProvider>>,
    opponent_pending: bool,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(rules: GameRules, human: Player, opponent: Option<Box<dyn MoveProvider>>) -> Self {
        let mut app = App {
            game: Game::new(rules),
            human,
            opponent,
            opponent_pending: false,
            selected_column: rules.cols / 2,
            should_quit: false,
            message: None,
        };
        app.queue_opponent();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.opponent_due() {
                self.opponent_turn();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn opponent_due(&self) -> bool {
        self.opponent_pending && !self.game.is_terminal()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.opponent_pending {
            return;
        }
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                let rules = *self.game.rules();
                self.game = Game::new(rules);
                self.opponent_pending = false;
                self.selected_column = rules.cols / 2;
                self.message = Some("New game started!".to_string());
                self.queue_opponent();
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column for whoever is at the keyboard
    fn drop_piece(&mut self) {
        if self.game.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game.apply_move(self.selected_column) {
            Ok(report) => {
                self.message = Some(describe(&report, None));
                self.clamp_selection();
                self.queue_opponent();
            }
            Err(GameError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Flag the opponent's turn so the next frame shows it thinking before
    /// the blocking call.
    fn queue_opponent(&mut self) {
        if let Some(opponent) = &self.opponent {
            if !self.game.is_terminal() && self.game.current_player() == self.human.other() {
                self.message = Some(format!("{} is thinking...", opponent.name()));
                self.opponent_pending = true;
            }
        }
    }

    fn opponent_turn(&mut self) {
        self.opponent_pending = false;
        let Some(opponent) = self.opponent.as_mut() else {
            return;
        };
        let name = opponent.name().to_string();
        self.message = Some(match self.game.play_turn(opponent.as_mut()) {
            Ok(report) => describe(&report, Some(&name)),
            Err(err) => err.to_string(),
        });
        self.clamp_selection();
    }

    /// Keep the cursor on the board after a rotation changes the width
    fn clamp_selection(&mut self) {
        let cols = self.game.board().cols();
        if self.selected_column >= cols {
            self.selected_column = cols.saturating_sub(1);
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let opponent = self
            .opponent
            .as_ref()
            .map_or("Human", |opponent| opponent.name());
        let seats = match self.human {
            Player::Red => ["You", opponent],
            Player::Yellow => [opponent, "You"],
        };
        super::game_view::render(frame, &self.game, self.selected_column, &self.message, seats);
    }
}

/// One-line summary of a turn for the message bar
fn describe(report: &TurnReport, provider: Option<&str>) -> String {
    let who = match provider {
        Some(name) => format!("{} ({})", report.player.name(), name),
        None => report.player.name().to_string(),
    };
    let mut parts = Vec::new();
    if let Some(reason) = &report.fallback {
        parts.push(format!("{reason}, random move used"));
    }
    match report.placement {
        Some((_, col)) => parts.push(format!("{who} dropped into column {}", col + 1)),
        None => parts.push(format!("{who} had no valid move")),
    }
    if report.rotated {
        parts.push("board rotated 90° clockwise!".to_string());
    }
    match report.outcome {
        GameOutcome::Winner(player) => parts.push(format!("{} wins!", player.name())),
        GameOutcome::Draw => parts.push("It's a draw!".to_string()),
        GameOutcome::InProgress => {}
    }
    parts.join("  |  ")
}
