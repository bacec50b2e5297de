use super::board::Board;
use super::types::{GameStatus, Mark, Move};

pub const WIN_SCORE: i32 = 10;
pub const LOSE_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

/// Exhaustive game-tree search scored from `maximizing`'s point of view.
///
/// Terminal boards score `WIN_SCORE`, `LOSE_SCORE` or `DRAW_SCORE` with no
/// depth adjustment: a slow win is worth the same as a fast one. Among
/// equally scored moves the lowest cell index is chosen.
pub struct Minimax {
    maximizing: Mark,
    nodes: u64,
}

impl Minimax {
    pub fn new(maximizing: Mark) -> Self {
        Self {
            maximizing,
            nodes: 0,
        }
    }

    /// Boards visited since construction, terminal leaves included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search(&mut self, board: &Board, to_move: Mark) -> Move {
        self.nodes += 1;

        let status = board.status();
        if status.is_terminal() {
            return Move::terminal(self.terminal_score(status));
        }

        let mut moves: Vec<Move> = board
            .empty_cells()
            .into_iter()
            .map(|idx| {
                let child = board.place(idx, to_move);
                let score = self.search(&child, to_move.opponent()).score;
                Move::new(idx, score)
            })
            .collect();

        // Stable sort keeps ascending index order among equal scores.
        if to_move == self.maximizing {
            moves.sort_by(|a, b| b.score.cmp(&a.score));
        } else {
            moves.sort_by(|a, b| a.score.cmp(&b.score));
        }

        match moves.first() {
            Some(&best) => best,
            None => unreachable!("non-terminal board has no empty cells"),
        }
    }

    fn terminal_score(&self, status: GameStatus) -> i32 {
        match status.winner() {
            Some(winner) if winner == self.maximizing => WIN_SCORE,
            Some(_) => LOSE_SCORE,
            None => DRAW_SCORE,
        }
    }
}

pub fn best_move(board: &Board, to_move: Mark, maximizing: Mark) -> Move {
    Minimax::new(maximizing).search(board, to_move)
}
