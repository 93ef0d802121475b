use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::error::StackError;
use crate::model::rules::RuleSet;

/// Outcome of a positional withdrawal from the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandWithdrawal {
    Taken(Card),
    /// The table rules forbid picking cards out of the middle of the hand.
    Disallowed,
}

/// Bounded working buffer refilled wholesale from the deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
    capacity: usize,
    allow_random_access: bool,
}

impl Hand {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            cards: Vec::with_capacity(rules.hand_size_max),
            capacity: rules.hand_size_max,
            allow_random_access: rules.allow_random_access,
        }
    }

    pub fn with_cards(cards: Vec<Card>, rules: &RuleSet) -> Result<Self, StackError> {
        if cards.len() > rules.hand_size_max {
            return Err(StackError::OverCapacity {
                size: cards.len(),
                capacity: rules.hand_size_max,
            });
        }
        Ok(Self {
            cards,
            capacity: rules.hand_size_max,
            allow_random_access: rules.allow_random_access,
        })
    }

    /// Removes the card at the end of the hand.
    pub fn pull(&mut self) -> Result<Card, StackError> {
        self.cards.pop().ok_or(StackError::Empty)
    }

    pub fn pull_at(&mut self, index: usize) -> Result<HandWithdrawal, StackError> {
        if !self.allow_random_access {
            return Ok(HandWithdrawal::Disallowed);
        }
        if self.cards.is_empty() {
            return Err(StackError::Empty);
        }
        if index >= self.cards.len() {
            return Err(StackError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(HandWithdrawal::Taken(self.cards.remove(index)))
    }

    /// Returns every held card to the bottom of `deck`, then refills from
    /// its top with as many cards as the capacity and the deck allow.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<(), StackError> {
        if !self.cards.is_empty() {
            deck.push_to_bottom(std::mem::take(&mut self.cards));
        }
        let count = self.capacity.min(deck.len());
        if count > 0 {
            self.cards = deck.pull_from_top(count)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn allows_random_access(&self) -> bool {
        self.allow_random_access
    }

    /// The card `pull` would return next.
    pub fn next_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::{Hand, HandWithdrawal};
    use crate::model::card::{Card, cards_from_values};
    use crate::model::deck::Deck;
    use crate::model::error::StackError;
    use crate::model::rules::RuleSet;
    use crate::model::test_support::WarnCounter;

    fn rules(max: usize, random_access: bool) -> RuleSet {
        RuleSet {
            hand_size_max: max,
            allow_random_access: random_access,
            ..RuleSet::default()
        }
    }

    #[test]
    fn over_capacity_construction_fails() {
        let err = Hand::with_cards(cards_from_values(&[1, 2, 3, 4]), &rules(3, true)).unwrap_err();
        assert_eq!(
            err,
            StackError::OverCapacity {
                size: 4,
                capacity: 3
            }
        );
    }

    #[test]
    fn pull_takes_the_last_card() {
        let mut hand = Hand::with_cards(cards_from_values(&[1, 2]), &rules(3, true)).unwrap();
        assert_eq!(hand.pull(), Ok(Card::from_value(2)));
        assert_eq!(hand.pull(), Ok(Card::from_value(1)));
        assert_eq!(hand.pull(), Err(StackError::Empty));
    }

    #[test]
    fn pull_at_respects_random_access_flag() {
        let mut locked = Hand::with_cards(cards_from_values(&[1, 2]), &rules(3, false)).unwrap();
        assert_eq!(locked.pull_at(0), Ok(HandWithdrawal::Disallowed));
        assert_eq!(locked.len(), 2);

        let mut open = Hand::with_cards(cards_from_values(&[1, 2]), &rules(3, true)).unwrap();
        assert_eq!(open.pull_at(0), Ok(HandWithdrawal::Taken(Card::from_value(1))));
        assert_eq!(
            open.pull_at(3),
            Err(StackError::IndexOutOfRange { index: 3, len: 1 })
        );
        open.pull().unwrap();
        assert_eq!(open.pull_at(0), Err(StackError::Empty));
    }

    #[test]
    fn draw_returns_hand_before_refilling() {
        let table = rules(3, true);
        let mut deck = Deck::from_cards(cards_from_values(&[10, 11]));
        let mut hand = Hand::with_cards(cards_from_values(&[1, 2]), &table).unwrap();
        hand.draw(&mut deck).unwrap();
        // Old hand went under the deck, so the refill is [2, 10, 11].
        assert_eq!(hand.cards(), cards_from_values(&[2, 10, 11]).as_slice());
        assert_eq!(deck.cards(), cards_from_values(&[1]).as_slice());
    }

    #[test]
    fn drawing_nothing_raises_no_warning() {
        let warnings = WarnCounter::default();
        let table = rules(3, true);
        let mut deck = Deck::new();
        let mut hand = Hand::new(&table);
        tracing::subscriber::with_default(warnings.clone(), || {
            hand.draw(&mut deck).unwrap();
        });
        assert!(hand.is_empty());
        assert_eq!(warnings.count(), 0);
    }

    #[test]
    fn draw_sizes_follow_capacity_and_deck() {
        for max in 1..=4 {
            for deck_size in 0..=6 {
                for held in 0..=max {
                    let table = rules(max, true);
                    let mut deck = Deck::reference(deck_size);
                    let mut hand = Hand::with_cards(Deck::reference(held).cards().to_vec(), &table)
                        .unwrap();
                    hand.draw(&mut deck).unwrap();
                    let expected = max.min(deck_size + held);
                    assert_eq!(hand.len(), expected);
                    assert!(hand.len() <= max);
                    assert_eq!(deck.len(), deck_size + held - expected);
                }
            }
        }
    }
}
