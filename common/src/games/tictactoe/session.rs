use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{BotDecision, BotInput, Difficulty, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::{AiSide, TicTacToeConfig};
use super::types::{GameStatus, Mark, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    x: PlayerKind,
    o: PlayerKind,
}

impl Players {
    pub fn from_ai_side(ai: Option<AiSide>) -> Self {
        let kind = |mark: Mark| match ai {
            Some(side) if side.controls(mark) => PlayerKind::Bot,
            _ => PlayerKind::Human,
        };
        Self {
            x: kind(Mark::X),
            o: kind(Mark::O),
        }
    }

    pub fn kind(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RandomGuess { mark: Mark, index: usize },
    AiMove {
        mark: Mark,
        index: usize,
        score: i32,
        nodes: u64,
    },
    InvalidMove { input: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub moves_played: usize,
    pub seed: u64,
}

/// Everything the turn loop needs from the outside world: drawing the
/// board, asking a human for a cell, and surfacing what happened.
pub trait SessionIo {
    fn show_board(&mut self, state: &TicTacToeGameState);

    /// `None` means input is exhausted and the game cannot continue.
    fn read_move(&mut self, mark: Mark) -> Option<String>;

    fn notify(&mut self, event: &SessionEvent);

    fn show_result(&mut self, outcome: &GameOutcome);
}

pub struct TicTacToeSession {
    state: TicTacToeGameState,
    players: Players,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(
        state: TicTacToeGameState,
        players: Players,
        difficulty: Difficulty,
        rng: SessionRng,
    ) -> Self {
        Self {
            state,
            players,
            difficulty,
            rng,
        }
    }

    pub fn from_config(config: &TicTacToeConfig, state: TicTacToeGameState) -> Self {
        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self::new(
            state,
            Players::from_ai_side(config.ai),
            config.difficulty(),
            rng,
        )
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn run(&mut self, io: &mut impl SessionIo) -> Result<GameOutcome, String> {
        log!(
            "Game started: X={:?} O={:?} difficulty={} seed={}",
            self.players.kind(Mark::X),
            self.players.kind(Mark::O),
            self.difficulty.threshold(),
            self.rng.seed()
        );

        loop {
            io.show_board(&self.state);

            if self.state.status().is_terminal() {
                break;
            }

            match self.players.kind(self.state.current_mark()) {
                PlayerKind::Bot => self.play_bot_turn(io)?,
                PlayerKind::Human => self.play_human_turn(io)?,
            }
        }

        let outcome = GameOutcome {
            status: self.state.status(),
            winning_line: self.state.winning_line(),
            moves_played: self.state.moves_played(),
            seed: self.rng.seed(),
        };
        log!(
            "Game over: {} after {} moves",
            outcome.status,
            outcome.moves_played
        );
        io.show_result(&outcome);
        Ok(outcome)
    }

    fn play_bot_turn(&mut self, io: &mut impl SessionIo) -> Result<(), String> {
        let mark = self.state.current_mark();
        let input = BotInput::from_game_state(&self.state);
        let decision = calculate_move(&input, self.difficulty, &mut self.rng)
            .ok_or_else(|| format!("Bot {} found no move on a live board", mark))?;

        let event = match decision {
            BotDecision::Random(index) => {
                log!("Bot {} guessed cell {}", mark, index);
                SessionEvent::RandomGuess { mark, index }
            }
            BotDecision::Search {
                index,
                score,
                nodes,
            } => {
                log!(
                    "Bot {} searched {} boards, chose {} with score {}",
                    mark,
                    nodes,
                    index,
                    score
                );
                SessionEvent::AiMove {
                    mark,
                    index,
                    score,
                    nodes,
                }
            }
        };
        io.notify(&event);

        self.state.place_mark(decision.index())
    }

    fn play_human_turn(&mut self, io: &mut impl SessionIo) -> Result<(), String> {
        let mark = self.state.current_mark();
        let Some(input) = io.read_move(mark) else {
            return Err("Input closed before the game finished".to_string());
        };

        let result = parse_cell(&input).and_then(|index| self.state.place_mark(index));
        if let Err(reason) = result {
            log!("Rejected move '{}' from {}: {}", input.trim(), mark, reason);
            io.notify(&SessionEvent::InvalidMove {
                input: input.trim().to_string(),
                reason,
            });
        }
        Ok(())
    }
}

fn parse_cell(input: &str) -> Result<usize, String> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a cell number", input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedIo {
        inputs: VecDeque<String>,
        boards_shown: usize,
        events: Vec<SessionEvent>,
        result: Option<GameOutcome>,
    }

    impl ScriptedIo {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl SessionIo for ScriptedIo {
        fn show_board(&mut self, _state: &TicTacToeGameState) {
            self.boards_shown += 1;
        }

        fn read_move(&mut self, _mark: Mark) -> Option<String> {
            self.inputs.pop_front()
        }

        fn notify(&mut self, event: &SessionEvent) {
            self.events.push(event.clone());
        }

        fn show_result(&mut self, outcome: &GameOutcome) {
            self.result = Some(outcome.clone());
        }
    }

    fn session(first: Mark, ai: Option<AiSide>, difficulty: u8) -> TicTacToeSession {
        TicTacToeSession::new(
            TicTacToeGameState::new(first),
            Players::from_ai_side(ai),
            Difficulty::new(difficulty),
            SessionRng::new(42),
        )
    }

    #[test]
    fn test_players_from_ai_side() {
        let humans = Players::from_ai_side(None);
        assert_eq!(humans.kind(Mark::X), PlayerKind::Human);
        assert_eq!(humans.kind(Mark::O), PlayerKind::Human);

        let bot_o = Players::from_ai_side(Some(AiSide::O));
        assert_eq!(bot_o.kind(Mark::X), PlayerKind::Human);
        assert_eq!(bot_o.kind(Mark::O), PlayerKind::Bot);

        let bots = Players::from_ai_side(Some(AiSide::Both));
        assert_eq!(bots.kind(Mark::X), PlayerKind::Bot);
    }

    #[test]
    fn test_two_humans_play_to_a_win() {
        let mut io = ScriptedIo::new(&["0", "3", "1", "4", "2"]);
        let outcome = session(Mark::X, None, 9).run(&mut io).unwrap();
        assert_eq!(outcome.status, GameStatus::XWon);
        assert_eq!(outcome.moves_played, 5);
        assert_eq!(outcome.winning_line.map(|l| l.cells), Some([0, 1, 2]));
        assert_eq!(io.boards_shown, 6);
        assert_eq!(io.result, Some(outcome));
        assert!(io.events.is_empty());
    }

    #[test]
    fn test_invalid_input_reprompts_same_turn() {
        let mut io = ScriptedIo::new(&["4", "abc", "9", "4", " 0 ", "1", "8", "7"]);
        let outcome = session(Mark::X, None, 9).run(&mut io).unwrap();

        // O took 0 after three rejected attempts; X never lost its turn order.
        assert_eq!(outcome.status, GameStatus::XWon);
        let rejected: Vec<&str> = io
            .events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::InvalidMove { input, .. } => Some(input.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(rejected, vec!["abc", "9", "4"]);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut io = ScriptedIo::new(&["4"]);
        assert!(session(Mark::X, None, 9).run(&mut io).is_err());
        assert!(io.result.is_none());
    }

    #[test]
    fn test_full_strength_bots_draw() {
        let mut io = ScriptedIo::new(&[]);
        let outcome = session(Mark::O, Some(AiSide::Both), 0)
            .run(&mut io)
            .unwrap();
        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(outcome.moves_played, 9);
        assert!(
            io.events
                .iter()
                .all(|e| matches!(e, SessionEvent::AiMove { .. }))
        );
    }

    #[test]
    fn test_easy_bot_guesses_then_searches() {
        let mut searched_games = 0;
        for seed in 0..20 {
            let mut io = ScriptedIo::new(&[]);
            let mut game = TicTacToeSession::new(
                TicTacToeGameState::new(Mark::X),
                Players::from_ai_side(Some(AiSide::Both)),
                Difficulty::new(4),
                SessionRng::new(seed),
            );
            let outcome = game.run(&mut io).unwrap();

            // Boards with 9 down to 5 empty cells are guessed, the rest searched.
            for (turn, event) in io.events.iter().enumerate() {
                if turn < 5 {
                    assert!(matches!(event, SessionEvent::RandomGuess { .. }));
                } else {
                    assert!(matches!(event, SessionEvent::AiMove { .. }));
                }
            }
            if outcome.moves_played > 5 {
                assert!(
                    io.events
                        .iter()
                        .any(|e| matches!(e, SessionEvent::AiMove { .. }))
                );
                searched_games += 1;
            }
        }
        // X can only win on the fifth move, so most random openings go on.
        assert!(searched_games > 0);
    }

    #[test]
    fn test_bot_blocks_human_threat() {
        // Only the centre holds a corner opening; after X takes 1 the bot must block 2.
        let mut io = ScriptedIo::new(&["0", "1"]);
        let mut game = session(Mark::X, Some(AiSide::O), 0);
        let _ = game.run(&mut io);
        assert_eq!(game.state().board().cell(4), Cell::O);
        assert_eq!(game.state().board().cell(2), Cell::O);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell(" 7\n"), Ok(7));
        assert!(parse_cell("seven").is_err());
        assert!(parse_cell("-1").is_err());
    }
}
