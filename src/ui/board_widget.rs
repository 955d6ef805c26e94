use crate::game::{Cell, GameState, GameStatus, PlayerId};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Display colours for both players' pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceColors {
    pub player1: Color,
    pub player2: Color,
}

impl PieceColors {
    pub fn get(&self, player: PlayerId) -> Color {
        match player {
            PlayerId::Player1 => self.player1,
            PlayerId::Player2 => self.player2,
        }
    }
}

/// Build the framed board: column numbers, grid rows, and a selector arrow
/// under `selected_column`. Pieces on a winning line are drawn highlighted.
pub fn board_lines(state: &GameState, selected_column: usize, colors: &PieceColors) -> Vec<Line<'static>> {
    let board = state.board();
    let width = board.width();
    let winning = match state.status() {
        GameStatus::Won(player) => board.winning_line(player),
        _ => None,
    };

    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // 3 chars to match "  ║"
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
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

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let span = match board.get(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Owned(player) => {
                    let on_line = winning.is_some_and(|line| line.contains(&(row, col)));
                    let style = Style::default().fg(colors.get(player));
                    if on_line {
                        Span::styled(" ◆ ", style.add_modifier(Modifier::BOLD))
                    } else {
                        Span::styled(" ● ", style)
                    }
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column && !state.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
