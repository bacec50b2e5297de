use super::board::{BOARD_SIZE, Board};
use super::types::{Cell, GameStatus, Mark, WinningLine};
use super::win_detector::{WINNING_LINES, check_win_with_line};

/// The one authoritative board of a game plus whose turn it is.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
    moves_played: usize,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            moves_played: 0,
        }
    }

    /// Resumes from a position. The side to move is derived from the mark
    /// counts: `first_mark` moves when counts are equal. Positions no game
    /// can reach are rejected.
    pub fn with_board(board: Board, first_mark: Mark) -> Result<Self, String> {
        let count = |mark: Mark| {
            board
                .cells()
                .iter()
                .filter(|&&cell| cell == Cell::from(mark))
                .count()
        };
        let first = count(first_mark);
        let second = count(first_mark.opponent());

        let current_mark = if first == second {
            first_mark
        } else if first == second + 1 {
            first_mark.opponent()
        } else {
            return Err(format!(
                "Position is unreachable when {} moves first ({} {} vs {} {})",
                first_mark,
                first,
                first_mark,
                second,
                first_mark.opponent()
            ));
        };

        let owners: Vec<Mark> = WINNING_LINES
            .iter()
            .filter_map(|line| {
                let mark = board.cell(line[0]).mark()?;
                line.iter()
                    .all(|&idx| board.cell(idx).mark() == Some(mark))
                    .then_some(mark)
            })
            .collect();
        if owners.contains(&Mark::X) && owners.contains(&Mark::O) {
            return Err("Position is unreachable: both X and O have three in a row".to_string());
        }

        // The winner made the last move, so play stopped with the turn on
        // the loser.
        if let Some(&winner) = owners.first()
            && current_mark == winner
        {
            return Err(format!(
                "Position is unreachable: play continued after {} won",
                winner
            ));
        }

        Ok(Self {
            board,
            current_mark,
            status: board.status(),
            last_move: None,
            moves_played: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err("Game is already over".to_string());
        }
        if index >= BOARD_SIZE {
            return Err(format!("Move must be between 0 and {}", BOARD_SIZE - 1));
        }

        self.board = self.board.apply(index, self.current_mark)?;
        self.last_move = Some(index);
        self.moves_played += 1;
        self.status = self.board.status();

        if self.status == GameStatus::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(())
    }
}
