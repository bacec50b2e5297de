mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, SIDE};
pub use bot_controller::{BotDecision, BotInput, Difficulty, calculate_move};
pub use game_state::TicTacToeGameState;
pub use minimax::{DRAW_SCORE, LOSE_SCORE, Minimax, WIN_SCORE, best_move};
pub use session::{GameOutcome, PlayerKind, Players, SessionEvent, SessionIo, TicTacToeSession};
pub use settings::{AiSide, CONFIG_FILE, TicTacToeConfig};
pub use types::{Cell, GameStatus, Mark, Move, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
