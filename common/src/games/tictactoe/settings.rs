use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::Validate;
use super::bot_controller::Difficulty;
use super::types::Mark;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

/// Which marks the computer plays. Absent means two humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiSide {
    X,
    O,
    Both,
}

impl AiSide {
    pub fn controls(self, mark: Mark) -> bool {
        match self {
            AiSide::X => mark == Mark::X,
            AiSide::O => mark == Mark::O,
            AiSide::Both => true,
        }
    }
}

impl fmt::Display for AiSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiSide::X => write!(f, "X"),
            AiSide::O => write!(f, "O"),
            AiSide::Both => write!(f, "both"),
        }
    }
}

impl FromStr for AiSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(AiSide::X),
            "o" => Ok(AiSide::O),
            "both" => Ok(AiSide::Both),
            other => Err(format!("Unknown AI side '{}', expected X, O or both", other)),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub ai: Option<AiSide>,
    pub difficulty: u8,
    pub first_mark: Mark,
    pub seed: Option<u64>,
    pub log_enabled: bool,
    pub color: bool,
}

impl TicTacToeConfig {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::new(self.difficulty)
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            ai: None,
            difficulty: Difficulty::MAX,
            first_mark: Mark::O,
            seed: None,
            log_enabled: false,
            color: true,
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.difficulty > Difficulty::MAX {
            return Err(format!(
                "difficulty must be between 0 and {}, got {}",
                Difficulty::MAX,
                self.difficulty
            ));
        }
        Ok(())
    }
}
