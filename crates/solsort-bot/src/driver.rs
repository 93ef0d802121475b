//! Plays whole games and turns them into sort results.
//!
//! A game is won when the deck and hand are spent and the field has
//! collapsed into one face-up run; that run is then moved onto the first
//! foundation, whose ordering check guards the output. Anything else ends
//! as a loss and the caller gets its input back unchanged.

use crate::error::SortError;
use crate::gamer::{GameStatus, Gamer, MoveDescriptor, Turn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use solsort_core::{Card, Game, RuleSet};
use std::collections::HashSet;
use tracing::{Level, event};

/// Why play stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    Won,
    /// The gamer found no candidate move.
    NoMoves,
    /// `RuleSet::max_turns` turns were played without a result.
    TurnLimit,
    /// A position came back around.
    Repetition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub status: GameStatus,
    pub termination: TerminationReason,
    pub turns: usize,
    pub moves: Vec<MoveDescriptor>,
}

impl PlayOutcome {
    pub fn is_win(&self) -> bool {
        self.status == GameStatus::Win
    }
}

/// Drives turns on an already set-up game until it is won or lost.
pub fn play(game: &mut Game) -> Result<PlayOutcome, SortError> {
    let rules = *game.rules();
    let mut gamer = Gamer::new(game);
    let mut moves = Vec::new();
    let mut seen = HashSet::new();
    if rules.detect_repetition {
        seen.insert(gamer.game().fingerprint());
    }

    let (status, termination) = loop {
        if gamer.game().is_won() {
            gamer.game_mut().collect_foundation()?;
            break (GameStatus::Win, TerminationReason::Won);
        }
        if moves.len() >= rules.max_turns {
            break (GameStatus::Loss, TerminationReason::TurnLimit);
        }
        match gamer.take_turn()? {
            Turn::Stuck => break (GameStatus::Loss, TerminationReason::NoMoves),
            Turn::Moved(action) => moves.push(action.descriptor),
        }
        if rules.detect_repetition && !seen.insert(gamer.game().fingerprint()) {
            break (GameStatus::Loss, TerminationReason::Repetition);
        }
    };

    event!(
        target: "solsort_bot::driver",
        Level::INFO,
        status = ?status,
        termination = ?termination,
        turns = moves.len(),
    );

    Ok(PlayOutcome {
        status,
        termination,
        turns: moves.len(),
        moves,
    })
}

/// Output of one sort attempt together with how the game went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub output: Vec<Card>,
    pub outcome: PlayOutcome,
}

pub fn sort_report<R: rand::Rng + ?Sized>(
    cards: &[Card],
    rules: RuleSet,
    rng: &mut R,
) -> Result<SortReport, SortError> {
    if let Some((field, message)) = rules.invalid_field() {
        return Err(SortError::InvalidRules { field, message });
    }
    let mut game = Game::new(cards.to_vec(), rules);
    game.setup(rng)?;
    event!(target: "solsort_bot::driver", Level::TRACE, table = %game);

    let outcome = play(&mut game)?;
    let output = if outcome.is_win() {
        game.foundation_output()
    } else {
        cards.to_vec()
    };
    Ok(SortReport { output, outcome })
}

/// Sorts by playing one game. A lost game returns `cards` unchanged; an
/// unusable `rules` table is refused before anything is dealt.
pub fn sort<R: rand::Rng + ?Sized>(
    cards: &[Card],
    rules: RuleSet,
    rng: &mut R,
) -> Result<Vec<Card>, SortError> {
    sort_report(cards, rules, rng).map(|report| report.output)
}

pub fn sort_with_seed(cards: &[Card], rules: RuleSet, seed: u64) -> Result<Vec<Card>, SortError> {
    let mut rng = StdRng::seed_from_u64(seed);
    sort(cards, rules, &mut rng)
}
