mod moves;

pub use moves::{GameAction, HAND_DUMP_SCORE, MoveDescriptor, TRANSFER_SCORE, apply};

use crate::error::SortError;
use serde::{Deserialize, Serialize};
use solsort_core::Game;
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// No legal move exists.
    Loss,
    /// A move was made and play continues.
    Playing,
    /// The driver found the field collapsed into one run.
    Win,
}

/// Result of one turn: the move that was made, or nothing to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Moved(GameAction),
    Stuck,
}

impl Turn {
    pub fn status(&self) -> GameStatus {
        match self {
            Turn::Moved(_) => GameStatus::Playing,
            Turn::Stuck => GameStatus::Loss,
        }
    }
}

/// Greedy single-ply player. Holds nothing but the table it plays on.
pub struct Gamer<'a> {
    game: &'a mut Game,
}

impl<'a> Gamer<'a> {
    pub fn new(game: &'a mut Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &*self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut *self.game
    }

    /// Every candidate for this turn, in enumeration order: column pairs
    /// with the source outermost, then the hand dump.
    pub fn enumerate_moves(&self) -> Vec<GameAction> {
        let field = self.game.field();
        let mut actions = Vec::new();

        for (src, source) in field.iter().enumerate() {
            let run = source.moveable_run();
            if run.is_empty() {
                continue;
            }
            for (dest, target) in field.iter().enumerate() {
                if src == dest {
                    continue;
                }
                let Some(top) = target.top_card().visible() else {
                    continue;
                };
                // Ranks climb by one along the run, so at most one card fits.
                let Some(offset) = run.iter().position(|card| top.is_followed_by(*card)) else {
                    continue;
                };
                let count = run.len() - offset;
                actions.push(GameAction::new(
                    TRANSFER_SCORE,
                    MoveDescriptor::Transfer { src, dest, count },
                    format!("{} onto {top}: column {src} -> column {dest} ({count})", run[offset]),
                ));
            }
        }

        // Unconditional: the hand card lands on column 0 whatever its top is.
        if let Some(card) = self.game.hand().next_card() {
            actions.push(GameAction::new(
                HAND_DUMP_SCORE,
                MoveDescriptor::HandToField { dest: 0 },
                format!("hand {card} -> column 0"),
            ));
        }

        actions
    }

    /// First candidate holding the strictly greatest score.
    pub fn select(candidates: &[GameAction]) -> Option<&GameAction> {
        let mut best: Option<&GameAction> = None;
        for candidate in candidates {
            match best {
                Some(current) if candidate.score <= current.score => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    pub fn take_turn(&mut self) -> Result<Turn, SortError> {
        let candidates = self.enumerate_moves();
        let Some(chosen) = Self::select(&candidates).cloned() else {
            event!(target: "solsort_bot::gamer", Level::DEBUG, "no legal move");
            return Ok(Turn::Stuck);
        };

        event!(
            target: "solsort_bot::gamer",
            Level::DEBUG,
            candidates = candidates.len(),
            score = chosen.score,
            chosen = %chosen.descriptor,
            label = %chosen.label,
        );
        apply(chosen.descriptor, &mut *self.game)?;
        Ok(Turn::Moved(chosen))
    }

    pub fn try_make_move(&mut self) -> Result<GameStatus, SortError> {
        self.take_turn().map(|turn| turn.status())
    }
}
