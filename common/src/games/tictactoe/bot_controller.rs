use crate::games::SessionRng;
use super::board::{BOARD_SIZE, Board};
use super::game_state::TicTacToeGameState;
use super::minimax::Minimax;
use super::types::Mark;

/// Number of empty cells at or below which the bot searches exhaustively.
/// Above it the bot picks a random empty cell. `0` is full strength from
/// the first move; `9` never searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MAX: u8 = BOARD_SIZE as u8;

    pub fn new(threshold: u8) -> Self {
        Self(threshold.min(Self::MAX))
    }

    pub fn full_strength() -> Self {
        Self(0)
    }

    pub fn threshold(self) -> u8 {
        self.0
    }

    pub fn searches_with(self, empty_cells: usize) -> bool {
        empty_cells <= self.0 as usize
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDecision {
    Random(usize),
    Search { index: usize, score: i32, nodes: u64 },
}

impl BotDecision {
    pub fn index(&self) -> usize {
        match self {
            BotDecision::Random(index) | BotDecision::Search { index, .. } => *index,
        }
    }
}

pub fn calculate_move(
    input: &BotInput,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<BotDecision> {
    if input.board.status().is_terminal() {
        return None;
    }

    let available_moves = input.board.empty_cells();
    if !difficulty.searches_with(available_moves.len()) {
        return rng.choose(&available_moves).copied().map(BotDecision::Random);
    }

    let mut search = Minimax::new(input.current_mark);
    let chosen = search.search(&input.board, input.current_mark);
    Some(BotDecision::Search {
        index: chosen.index?,
        score: chosen.score,
        nodes: search.nodes(),
    })
}
