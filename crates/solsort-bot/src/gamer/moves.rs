use crate::error::SortError;
use serde::{Deserialize, Serialize};
use solsort_core::Game;
use std::fmt;

pub const TRANSFER_SCORE: i32 = 1;
pub const HAND_DUMP_SCORE: i32 = 999;

/// What a move does, by index only. Applied with [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveDescriptor {
    /// Move the top `count` cards of column `src` onto column `dest`. The
    /// count runs from the run card that follows dest's top up through the
    /// column's top, so the moved segment always lands legally.
    Transfer { src: usize, dest: usize, count: usize },
    /// Move the hand's next card onto column `dest`.
    HandToField { dest: usize },
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDescriptor::Transfer { src, dest, count } => {
                write!(f, "transfer {count} from column {src} to column {dest}")
            }
            MoveDescriptor::HandToField { dest } => write!(f, "hand to column {dest}"),
        }
    }
}

/// One scored candidate for the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAction {
    pub score: i32,
    pub descriptor: MoveDescriptor,
    pub label: String,
}

impl GameAction {
    pub fn new(score: i32, descriptor: MoveDescriptor, label: impl Into<String>) -> Self {
        Self {
            score,
            descriptor,
            label: label.into(),
        }
    }
}

/// Performs `descriptor` against the live table.
pub fn apply(descriptor: MoveDescriptor, game: &mut Game) -> Result<(), SortError> {
    match descriptor {
        MoveDescriptor::Transfer { src, dest, count } => {
            let (source, target) = game.column_pair_mut(src, dest)?;
            let cards = source.pull_from_top(count)?;
            target.push_to_top(cards);
        }
        MoveDescriptor::HandToField { dest } => {
            game.column(dest)?;
            let card = game.hand_mut().pull()?;
            game.column_mut(dest)?.push_to_top([card]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MoveDescriptor, apply};
    use crate::error::SortError;
    use solsort_core::model::card::cards_from_values;
    use solsort_core::{GameSnapshot, RuleSet, StackError};

    fn game(columns: &[&[u8]], hand: &[u8]) -> solsort_core::Game {
        GameSnapshot::face_up(
            RuleSet::default(),
            columns.iter().map(|c| cards_from_values(c)).collect(),
            cards_from_values(hand),
            Vec::new(),
        )
        .restore()
        .unwrap()
    }

    #[test]
    fn transfer_moves_cards_in_order() {
        let mut table = game(&[&[9, 2, 3], &[1]], &[]);
        apply(
            MoveDescriptor::Transfer {
                src: 0,
                dest: 1,
                count: 2,
            },
            &mut table,
        )
        .unwrap();
        assert_eq!(table.column(0).unwrap().cards(), cards_from_values(&[9]).as_slice());
        assert_eq!(
            table.column(1).unwrap().cards(),
            cards_from_values(&[1, 2, 3]).as_slice()
        );
        assert_eq!(table.column(1).unwrap().face_up(), 3);
    }

    #[test]
    fn hand_to_field_places_last_hand_card() {
        let mut table = game(&[&[4]], &[7, 8]);
        apply(MoveDescriptor::HandToField { dest: 0 }, &mut table).unwrap();
        assert_eq!(table.column(0).unwrap().cards(), cards_from_values(&[4, 8]).as_slice());
        assert_eq!(table.hand().cards(), cards_from_values(&[7]).as_slice());
    }

    #[test]
    fn bad_indices_are_precondition_errors() {
        let mut table = game(&[&[4]], &[7]);
        let err = apply(MoveDescriptor::HandToField { dest: 12 }, &mut table).unwrap_err();
        assert!(matches!(
            err,
            SortError::Precondition(StackError::ColumnOutOfRange { index: 12, .. })
        ));
        assert_eq!(table.hand().len(), 1);

        let err = apply(
            MoveDescriptor::Transfer {
                src: 0,
                dest: 1,
                count: 2,
            },
            &mut table,
        )
        .unwrap_err();
        assert!(matches!(err, SortError::Precondition(StackError::NotEnoughCards { .. })));
    }

    #[test]
    fn descriptors_serialize_with_kind_tag() {
        let json = serde_json::to_string(&MoveDescriptor::HandToField { dest: 0 }).unwrap();
        assert_eq!(json, r#"{"kind":"hand_to_field","dest":0}"#);
        let parsed: MoveDescriptor =
            serde_json::from_str(r#"{"kind":"transfer","src":1,"dest":2,"count":3}"#).unwrap();
        assert_eq!(
            parsed,
            MoveDescriptor::Transfer {
                src: 1,
                dest: 2,
                count: 3
            }
        );
    }
}
