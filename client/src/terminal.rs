use std::io::{BufRead, Write};

use common::games::tictactoe::{
    GameOutcome, GameStatus, Mark, SessionEvent, SessionIo, TicTacToeGameState,
};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::colors::render_board;

pub struct TerminalIo<R: BufRead, W: Write> {
    input: R,
    out: W,
    color: bool,
    clear_screen: bool,
    pending_message: Option<String>,
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    pub fn new(input: R, out: W, color: bool, clear_screen: bool) -> Self {
        Self {
            input,
            out,
            color,
            clear_screen,
            pending_message: None,
        }
    }

    fn clear(&mut self) {
        if self.clear_screen {
            let _ = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0));
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> SessionIo for TerminalIo<R, W> {
    fn show_board(&mut self, state: &TicTacToeGameState) {
        self.clear();
        let winning_line = state.winning_line();
        let board = render_board(state.board(), winning_line.as_ref(), self.color);
        let _ = writeln!(self.out, "{}", board);
        if let Some(message) = self.pending_message.take() {
            let _ = writeln!(self.out, "{}", message);
        }
    }

    fn read_move(&mut self, mark: Mark) -> Option<String> {
        let _ = write!(self.out, "Enter move for {} (0-8): ", mark);
        let _ = self.out.flush();

        // Bytes that are not UTF-8 still form a line; it is handed on so the
        // move is rejected and the turn re-prompted.
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(String::from_utf8_lossy(&line).into_owned()),
        }
    }

    fn notify(&mut self, event: &SessionEvent) {
        let message = match event {
            SessionEvent::RandomGuess { mark, index } => {
                format!("RANDOM GUESS: {} took {}", mark, index)
            }
            SessionEvent::AiMove { mark, index, .. } => {
                format!("AI MOVE: {} took {}", mark, index)
            }
            SessionEvent::InvalidMove { reason, .. } => {
                format!("Invalid move ({}). Please try again.", reason)
            }
        };
        self.pending_message = Some(message);
    }

    fn show_result(&mut self, outcome: &GameOutcome) {
        let _ = match outcome.status.winner() {
            Some(winner) => writeln!(self.out, "WINNER IS: {}", winner),
            None if outcome.status == GameStatus::Draw => writeln!(self.out, "TIE"),
            None => writeln!(self.out, "Game stopped"),
        };
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::{AiSide, Difficulty, Players, TicTacToeSession};
    use std::io::Cursor;

    fn play(input: &str) -> (Result<GameOutcome, String>, String) {
        play_bytes(input.as_bytes(), None)
    }

    fn play_bytes(input: &[u8], ai: Option<AiSide>) -> (Result<GameOutcome, String>, String) {
        let mut io = TerminalIo::new(Cursor::new(input.to_vec()), Vec::new(), false, false);
        let mut session = TicTacToeSession::new(
            TicTacToeGameState::new(Mark::X),
            Players::from_ai_side(ai),
            Difficulty::full_strength(),
            SessionRng::new(42),
        );
        let result = session.run(&mut io);
        let output = String::from_utf8(io.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_human_game_prints_winner() {
        let (result, output) = play("0\n3\n1\n4\n2\n");
        assert_eq!(result.unwrap().status, GameStatus::XWon);
        assert!(output.contains("Enter move for X (0-8): "));
        assert!(output.contains("Enter move for O (0-8): "));
        assert!(output.ends_with("WINNER IS: X\n"));
    }

    #[test]
    fn test_invalid_move_message_shown_with_next_board() {
        let (_, output) = play("0\n0\n");
        assert!(output.contains("Invalid move (Cell 0 is already marked). Please try again."));
    }

    #[test]
    fn test_non_utf8_line_is_rejected_and_reprompted() {
        let (result, output) = play_bytes(b"\xff\xfe\n0\n3\n1\n4\n2\n", None);
        let outcome = result.unwrap();
        assert_eq!(outcome.status, GameStatus::XWon);
        assert_eq!(outcome.moves_played, 5);
        assert!(output.contains("is not a cell number). Please try again."));
    }

    #[test]
    fn test_bot_move_is_announced_with_cell() {
        // After X opens in the corner the only holding reply is the centre.
        let (_, output) = play_bytes(b"0\n", Some(AiSide::O));
        assert!(output.contains("AI MOVE: O took 4"));
    }

    #[test]
    fn test_eof_stops_game() {
        let (result, output) = play("4\n");
        assert!(result.is_err());
        assert!(!output.contains("WINNER"));
    }

    #[test]
    fn test_draw_prints_tie() {
        let (result, output) = play("0\n1\n2\n4\n3\n5\n7\n6\n8\n");
        assert_eq!(result.unwrap().status, GameStatus::Draw);
        assert!(output.ends_with("TIE\n"));
    }
}
