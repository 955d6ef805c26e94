use super::board::{Board, DropError};
use super::player::{PlayerId, PlayerLabels};
use crate::error::EngineError;

/// Default board height.
pub const DEFAULT_HEIGHT: usize = 6;
/// Default board width.
pub const DEFAULT_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// Why a move was not applied. The state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Result of a move attempt, so the caller can react without inspecting the
/// state again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    Won(PlayerId),
    Tied,
    Rejected(MoveError),
}

impl MoveOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: PlayerId,
    status: GameStatus,
    labels: PlayerLabels,
}

impl GameState {
    /// Create a fresh game: empty grid, Player 1 to move.
    ///
    /// Boards smaller than 4 in either dimension are accepted, but no line of
    /// four can ever form on them, so such games can only end in a tie.
    pub fn create(height: usize, width: usize, labels: PlayerLabels) -> Result<Self, EngineError> {
        let cells = height.checked_mul(width).filter(|&cells| {
            cells > 0 && cells <= isize::MAX as usize / std::mem::size_of::<super::Cell>()
        });
        if cells.is_none() {
            return Err(EngineError::InvalidDimensions { height, width });
        }
        if height < super::CONNECT || width < super::CONNECT {
            log::warn!(
                "{height}x{width} board is too small for four in a row; the game can only tie"
            );
        }
        log::info!(
            "new {height}x{width} game: {} vs {}",
            labels.player1,
            labels.player2
        );

        Ok(GameState {
            board: Board::new(height, width),
            current_player: PlayerId::Player1,
            status: GameStatus::InProgress,
            labels,
        })
    }

    /// Create a game with default player labels.
    pub fn new(height: usize, width: usize) -> Result<Self, EngineError> {
        Self::create(height, width, PlayerLabels::default())
    }

    /// Get current player
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn labels(&self) -> &PlayerLabels {
        &self.labels
    }

    pub fn label(&self, player: PlayerId) -> &str {
        self.labels.get(player)
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.board.occupied()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Row a piece dropped in `column` would land on, or `None` if the
    /// column is full or off the board.
    pub fn find_drop_row(&self, column: usize) -> Option<usize> {
        self.board.find_drop_row(column)
    }

    /// Full-board scan for a line of four owned by the current player.
    pub fn check_for_win(&self) -> bool {
        self.board.check_for_win(self.current_player)
    }

    /// Columns that still accept a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new state (immutable). A rejected move
    /// returns an unchanged copy.
    pub fn apply_move(&self, column: usize) -> (GameState, MoveOutcome) {
        let mut next = self.clone();
        let outcome = next.apply_move_mut(column);
        (next, outcome)
    }

    /// Apply a move in place (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> MoveOutcome {
        if self.is_terminal() {
            log::debug!("move in column {column} ignored: game is over");
            return MoveOutcome::Rejected(MoveError::GameOver);
        }

        let row = match self.board.drop_piece(column, self.current_player) {
            Ok(row) => row,
            Err(e) => {
                let err = match e {
                    DropError::InvalidColumn => MoveError::InvalidColumn {
                        column,
                        width: self.width(),
                    },
                    DropError::ColumnFull => MoveError::ColumnFull { column },
                };
                log::debug!("move rejected: {err}");
                return MoveOutcome::Rejected(err);
            }
        };

        // Win is checked before tie: a winning move that fills the board wins
        if self.board.completes_line(row, column) {
            self.status = GameStatus::Won(self.current_player);
            log::info!("{} wins", self.label(self.current_player));
            return MoveOutcome::Won(self.current_player);
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            log::info!("board full, game tied");
            return MoveOutcome::Tied;
        }

        self.current_player = self.current_player.other();
        MoveOutcome::Continued
    }
}
