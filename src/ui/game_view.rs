use super::board_widget::{board_lines, PieceColors};
use crate::game::{GameState, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the view needs from the app for one frame.
pub struct ViewModel<'a> {
    pub game_state: &'a GameState,
    pub colors: &'a PieceColors,
    pub selected_column: usize,
    pub message: Option<&'a str>,
    /// Dimensions the next game will use, as (height, width)
    pub next_size: (usize, usize),
}

pub fn render(frame: &mut Frame, view: &ViewModel) {
    let board_height = board_area_height(view.game_state);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(4),            // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, view.next_size, chunks[3]);
}

/// Rows needed by the framed board: grid plus numbers, borders, and selector.
pub fn board_area_height(game_state: &GameState) -> u16 {
    u16::try_from(game_state.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

/// Status text and colour for the header.
pub fn header_text(game_state: &GameState, colors: &PieceColors) -> (String, Color) {
    match game_state.status() {
        GameStatus::InProgress => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}", game_state.label(player)),
                colors.get(player),
            )
        }
        GameStatus::Won(player) => (
            format!("{} won!", game_state.label(player)),
            colors.get(player),
        ),
        GameStatus::Tied => ("Tie!".to_string(), Color::White),
    }
}

fn render_header(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let (status, color) = header_text(view.game_state, view.colors);

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let lines = board_lines(view.game_state, view.selected_column, view.colors);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, next_size: (usize, usize), area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit");
    let line2 = Line::from(format!(
        "h/H: Height -/+  |  w/W: Width -/+  |  Next game: {}x{}",
        next_size.0, next_size.1
    ));

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
