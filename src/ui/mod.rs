//! Terminal UI: renders the board, routes key presses to the engine, and
//! announces results. Holds no rules of its own.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
