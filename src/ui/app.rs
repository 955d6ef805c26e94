use super::board_widget::PieceColors;
use super::game_view::{self, ViewModel};
use crate::config::{AppConfig, MAX_DIMENSION};
use crate::error::ConfigError;
use crate::game::{GameState, MoveError, MoveOutcome, PlayerId};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    colors: PieceColors,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app and start the first game from a config.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let colors = PieceColors {
            player1: config.player1.color()?,
            player2: config.player2.color()?,
        };
        let game_state = Self::create_game(&config)?;

        Ok(App {
            selected_column: game_state.width() / 2, // Start in middle
            config,
            colors,
            game_state,
            should_quit: false,
            message: None,
        })
    }

    fn create_game(config: &AppConfig) -> Result<GameState, ConfigError> {
        GameState::create(config.game.height, config.game.width, config.labels())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
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
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            KeyCode::Char('h') => self.resize_next(-1, 0),
            KeyCode::Char('H') => self.resize_next(1, 0),
            KeyCode::Char('w') => self.resize_next(0, -1),
            KeyCode::Char('W') => self.resize_next(0, 1),
            _ => {}
        }
    }

    /// Discard the current game and start a fresh one with the current settings
    fn new_game(&mut self) {
        match Self::create_game(&self.config) {
            Ok(state) => {
                self.selected_column = state.width() / 2;
                self.game_state = state;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => {
                log::error!("could not start a new game: {e}");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Adjust the dimensions used by the next new game
    fn resize_next(&mut self, d_height: isize, d_width: isize) {
        let clamp = |value: usize, delta: isize| {
            value
                .saturating_add_signed(delta)
                .clamp(1, MAX_DIMENSION)
        };
        self.config.game.height = clamp(self.config.game.height, d_height);
        self.config.game.width = clamp(self.config.game.width, d_width);
        self.message = Some(format!(
            "Next game: {}x{} (press 'r' to start)",
            self.config.game.height, self.config.game.width
        ));
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let outcome = self.game_state.apply_move_mut(self.selected_column);
        self.message = match outcome {
            MoveOutcome::Continued => None,
            MoveOutcome::Won(player) => Some(format!("{} won!", self.label(player))),
            MoveOutcome::Tied => Some("Tie!".to_string()),
            MoveOutcome::Rejected(MoveError::ColumnFull { .. }) => {
                Some("Column is full!".to_string())
            }
            MoveOutcome::Rejected(MoveError::InvalidColumn { .. }) => {
                Some("Invalid column!".to_string())
            }
            MoveOutcome::Rejected(MoveError::GameOver) => {
                Some("Game over! Press 'r' to start a new game.".to_string())
            }
        };
    }

    fn label(&self, player: PlayerId) -> &str {
        self.game_state.label(player)
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = ViewModel {
            game_state: &self.game_state,
            colors: &self.colors,
            selected_column: self.selected_column,
            message: self.message.as_deref(),
            next_size: (self.config.game.height, self.config.game.width),
        };
        game_view::render(frame, &view);
    }
}
