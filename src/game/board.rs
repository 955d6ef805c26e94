use super::player::PlayerId;

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Line orientations as (row step, column step), in scan order:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owned(PlayerId),
}

/// A `height x width` grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board. `height * width` must not overflow;
    /// `GameState::create` checks this.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position. Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }

    /// Cell lookup with signed coordinates; `None` off the board.
    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_drop_row(col).is_none()
    }

    /// Lowest empty row in `col`, scanning from the bottom up.
    pub fn find_drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, DropError> {
        if col >= self.width {
            return Err(DropError::InvalidColumn);
        }
        let row = self.find_drop_row(col).ok_or(DropError::ColumnFull)?;
        self.cells[row * self.width + col] = Cell::Owned(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Scan every cell in row-major order as the start of a line in each
    /// direction and return the first line fully owned by `owner`.
    pub fn winning_line(&self, owner: PlayerId) -> Option<[(usize, usize); CONNECT]> {
        let target = Cell::Owned(owner);
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in DIRECTIONS.iter() {
                    let mut line = [(0usize, 0usize); CONNECT];
                    let mut owned = true;
                    for (step, slot) in line.iter_mut().enumerate() {
                        let r = row as isize + dr * step as isize;
                        let c = col as isize + dc * step as isize;
                        if self.cell_at(r, c) != Some(target) {
                            owned = false;
                            break;
                        }
                        *slot = (r as usize, c as usize);
                    }
                    if owned {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// Whether any line of four is owned by `owner`.
    pub fn check_for_win(&self, owner: PlayerId) -> bool {
        self.winning_line(owner).is_some()
    }

    /// Check if the piece at (row, col) sits on a line of four of its owner.
    /// Gives the same verdict as `check_for_win` right after that piece is
    /// placed, since any earlier line would already have ended the game.
    pub fn completes_line(&self, row: usize, col: usize) -> bool {
        let owner = match self.get(row, col) {
            Cell::Empty => return false,
            cell => cell,
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.run_length(row, col, dr, dc, owner)
                + self.run_length(row, col, -dr, -dc, owner);
            count >= CONNECT
        })
    }

    /// Count consecutive `owner` cells from (row, col) in one direction,
    /// excluding the starting cell.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, owner: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while self.cell_at(r, c) == Some(owner) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayerId::{Player1 as P1, Player2 as P2};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(6, 6);

        let row = board.drop_piece(3, P1).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Owned(P1));

        let row = board.drop_piece(3, P2).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Owned(P2));
    }

    #[test]
    fn test_find_drop_row() {
        let mut board = Board::new(4, 5);
        assert_eq!(board.find_drop_row(2), Some(3));
        board.drop_piece(2, P1).unwrap();
        assert_eq!(board.find_drop_row(2), Some(2));
        assert_eq!(board.find_drop_row(5), None);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 6);
        for _ in 0..6 {
            board.drop_piece(0, P1).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.find_drop_row(0), None);
        assert_eq!(board.drop_piece(0, P2), Err(DropError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 6);
        assert_eq!(board.drop_piece(6, P1), Err(DropError::InvalidColumn));
        assert!(board.is_column_full(6));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 5);
        for col in 0..5 {
            for _ in 0..4 {
                board.drop_piece(col, P1).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), 20);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(6, 7);
        for col in 1..5 {
            board.drop_piece(col, P1).unwrap();
        }
        assert!(board.completes_line(5, 2)); // Middle of the line
        assert_eq!(
            board.winning_line(P1),
            Some([(5, 1), (5, 2), (5, 3), (5, 4)])
        );
        assert!(!board.check_for_win(P2));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(6, 7);
        for _ in 0..4 {
            board.drop_piece(3, P2).unwrap();
        }
        assert!(board.completes_line(2, 3));
        assert_eq!(
            board.winning_line(P2),
            Some([(2, 3), (3, 3), (4, 3), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(6, 7);
        // Create diagonal / pattern
        board.drop_piece(0, P1).unwrap();

        board.drop_piece(1, P2).unwrap();
        board.drop_piece(1, P1).unwrap();

        board.drop_piece(2, P2).unwrap();
        board.drop_piece(2, P2).unwrap();
        board.drop_piece(2, P1).unwrap();

        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        let row = board.drop_piece(3, P1).unwrap();

        assert!(board.completes_line(row, 3));
        // Found from its top end, scanning down-left
        assert_eq!(
            board.winning_line(P1),
            Some([(2, 3), (3, 2), (4, 1), (5, 0)])
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(6, 7);
        // Create diagonal \ pattern
        board.drop_piece(6, P1).unwrap();

        board.drop_piece(5, P2).unwrap();
        board.drop_piece(5, P1).unwrap();

        board.drop_piece(4, P2).unwrap();
        board.drop_piece(4, P2).unwrap();
        board.drop_piece(4, P1).unwrap();

        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        let row = board.drop_piece(3, P1).unwrap();

        assert!(board.completes_line(row, 3));
        assert_eq!(
            board.winning_line(P1),
            Some([(2, 3), (3, 4), (4, 5), (5, 6)])
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.drop_piece(col, P1).unwrap();
        }
        assert!(!board.completes_line(5, 1));
        assert!(!board.check_for_win(P1));
    }

    #[test]
    fn test_small_board_never_wins() {
        let mut board = Board::new(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, P1).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.check_for_win(P1));
        assert!(!board.completes_line(0, 0));
    }

    #[test]
    fn test_empty_cell_never_completes_line() {
        let board = Board::new(6, 6);
        assert!(!board.completes_line(5, 0));
    }
}
