use super::game_state::Game;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::error::FoundationError;
use crate::model::field::FieldStack;
use crate::model::foundation::FoundationStack;
use crate::model::hand::Hand;
use crate::model::rules::RuleSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSnapshot {
    pub cards: Vec<Card>,
    pub face_up: usize,
}

/// Plain-data copy of a table, for fixtures and for dumping a position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    #[serde(default)]
    pub rules: RuleSet,
    #[serde(default)]
    pub deck: Vec<Card>,
    #[serde(default)]
    pub hand: Vec<Card>,
    pub field: Vec<ColumnSnapshot>,
    #[serde(default)]
    pub foundations: Vec<Vec<Card>>,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        GameSnapshot {
            rules: *game.rules(),
            deck: game.deck().cards().to_vec(),
            hand: game.hand().cards().to_vec(),
            field: game
                .field()
                .iter()
                .map(|column| ColumnSnapshot {
                    cards: column.cards().to_vec(),
                    face_up: column.face_up(),
                })
                .collect(),
            foundations: game
                .foundations()
                .iter()
                .map(|foundation| foundation.cards().to_vec())
                .collect(),
        }
    }

    /// Columns given bottom to top, every card face-up. Missing columns
    /// are filled with empty ones up to `rules.field_columns`.
    pub fn face_up(rules: RuleSet, columns: Vec<Vec<Card>>, hand: Vec<Card>, deck: Vec<Card>) -> Self {
        let mut field: Vec<ColumnSnapshot> = columns
            .into_iter()
            .map(|cards| ColumnSnapshot {
                face_up: cards.len(),
                cards,
            })
            .collect();
        while field.len() < rules.field_columns {
            field.push(ColumnSnapshot {
                cards: Vec::new(),
                face_up: 0,
            });
        }
        GameSnapshot {
            rules,
            deck,
            hand,
            field,
            foundations: vec![Vec::new(); rules.foundations],
        }
    }

    /// Rebuilds the table. Foundations are replayed through their ordering
    /// check, so a corrupt snapshot is refused.
    pub fn restore(&self) -> Result<Game, FoundationError> {
        let hand = Hand::with_cards(self.hand.clone(), &self.rules)?;
        let field = self
            .field
            .iter()
            .map(|column| FieldStack::with_cards(column.cards.clone(), column.face_up))
            .collect::<Result<Vec<_>, _>>()?;
        let mut foundations = Vec::with_capacity(self.foundations.len());
        for cards in &self.foundations {
            let mut foundation = FoundationStack::new();
            if !cards.is_empty() {
                foundation.push_to_top(cards)?;
            }
            foundations.push(foundation);
        }
        Ok(Game::from_parts(
            self.rules,
            Deck::from_cards(self.deck.clone()),
            hand,
            field,
            foundations,
        ))
    }

    pub fn to_json(game: &Game) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(game))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::GameSnapshot;
    use crate::game::game_state::Game;
    use crate::model::card::cards_from_values;
    use crate::model::deck::Deck;
    use crate::model::error::{FoundationError, StackError};
    use crate::model::rules::RuleSet;

    #[test]
    fn dealt_game_survives_json() {
        let game = Game::with_seed(Deck::reference(40).cards().to_vec(), RuleSet::default(), 9)
            .unwrap();
        let json = GameSnapshot::to_json(&game).unwrap();
        let restored = GameSnapshot::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored.fingerprint(), game.fingerprint());
        assert_eq!(restored.to_string(), game.to_string());
    }

    #[test]
    fn face_up_fills_missing_columns() {
        let snapshot = GameSnapshot::face_up(
            RuleSet::default(),
            vec![cards_from_values(&[1, 2])],
            cards_from_values(&[7]),
            Vec::new(),
        );
        assert_eq!(snapshot.field.len(), 8);
        let game = snapshot.restore().unwrap();
        assert_eq!(game.column(0).unwrap().face_up(), 2);
        assert_eq!(game.hand().len(), 1);
    }

    #[test]
    fn restore_rejects_bad_piles() {
        let mut snapshot = GameSnapshot::face_up(RuleSet::default(), Vec::new(), Vec::new(), Vec::new());
        snapshot.foundations = vec![cards_from_values(&[4, 2])];
        assert!(matches!(
            snapshot.restore(),
            Err(FoundationError::OutOfOrder { .. })
        ));

        snapshot.foundations = Vec::new();
        snapshot.hand = cards_from_values(&[1, 2, 3, 4]);
        assert!(matches!(
            snapshot.restore(),
            Err(FoundationError::Stack(StackError::OverCapacity { .. }))
        ));
    }
}
