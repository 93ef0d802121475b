use crate::model::card::Card;
use crate::model::error::StackError;
use core::fmt;

/// What sits on top of a field column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopCard {
    Empty,
    FaceDown,
    Visible(Card),
}

impl TopCard {
    pub fn visible(self) -> Option<Card> {
        match self {
            TopCard::Visible(card) => Some(card),
            TopCard::Empty | TopCard::FaceDown => None,
        }
    }
}

/// A field column: a face-down prefix under a face-up suffix of
/// `face_up` cards. `cards` runs bottom to top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldStack {
    cards: Vec<Card>,
    face_up: usize,
}

impl FieldStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a column with the top `face_up` cards visible.
    pub fn with_cards(cards: Vec<Card>, face_up: usize) -> Result<Self, StackError> {
        if face_up > cards.len() {
            return Err(StackError::NotEnoughCards {
                requested: face_up,
                available: cards.len(),
            });
        }
        Ok(Self { cards, face_up })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn face_up(&self) -> usize {
        self.face_up
    }

    pub fn face_down(&self) -> usize {
        self.cards.len() - self.face_up
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn face_up_cards(&self) -> &[Card] {
        &self.cards[self.face_down()..]
    }

    /// Longest face-up suffix in which every card is one rank above the
    /// card beneath it.
    pub fn moveable_run(&self) -> &[Card] {
        let visible = self.face_up_cards();
        if visible.is_empty() {
            return visible;
        }
        let mut start = visible.len() - 1;
        while start > 0 && visible[start - 1].is_followed_by(visible[start]) {
            start -= 1;
        }
        &visible[start..]
    }

    /// True when every card is face-up and the whole column is one run.
    pub fn is_single_run(&self) -> bool {
        self.face_down() == 0 && self.moveable_run().len() == self.cards.len()
    }

    pub fn top_card(&self) -> TopCard {
        match self.cards.last() {
            None => TopCard::Empty,
            Some(_) if self.face_up == 0 => TopCard::FaceDown,
            Some(card) => TopCard::Visible(*card),
        }
    }

    pub fn push_to_top(&mut self, cards: impl IntoIterator<Item = Card>) {
        let before = self.cards.len();
        self.cards.extend(cards);
        let added = self.cards.len() - before;
        if added == 0 {
            tracing::warn!(target: "solsort_core::stack", "pushed zero cards onto a field column");
        }
        self.face_up += added;
    }

    /// Removes the top `n` face-up cards, returned bottom to top.
    pub fn pull_from_top(&mut self, n: usize) -> Result<Vec<Card>, StackError> {
        if n > self.cards.len() {
            return Err(StackError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        if n > self.face_up {
            return Err(StackError::NotEnoughFaceUp {
                requested: n,
                face_up: self.face_up,
            });
        }
        if n == 0 {
            tracing::warn!(target: "solsort_core::stack", "pulled zero cards from a field column");
        }
        let at = self.cards.len() - n;
        self.face_up -= n;
        Ok(self.cards.split_off(at))
    }

    pub fn pull_top(&mut self) -> Result<Card, StackError> {
        if self.cards.is_empty() {
            return Err(StackError::Empty);
        }
        let mut pulled = self.pull_from_top(1)?;
        pulled.pop().ok_or(StackError::Empty)
    }

    pub fn reveal(&mut self, n: usize) -> Result<(), StackError> {
        let face_down = self.face_down();
        if n > face_down {
            return Err(StackError::NotEnoughFaceDown {
                requested: n,
                face_down,
            });
        }
        self.face_up += n;
        Ok(())
    }

    pub fn conceal(&mut self, n: usize) -> Result<(), StackError> {
        if n > self.face_up {
            return Err(StackError::NotEnoughFaceUp {
                requested: n,
                face_up: self.face_up,
            });
        }
        self.face_up -= n;
        Ok(())
    }
}

impl fmt::Display for FieldStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face_down = self.face_down();
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            if idx < face_down {
                f.write_str("XX")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldStack, TopCard};
    use crate::model::card::{Card, cards_from_values};
    use crate::model::error::StackError;

    fn face_up(values: &[u8]) -> FieldStack {
        FieldStack::with_cards(cards_from_values(values), values.len()).unwrap()
    }

    #[test]
    fn broken_chain_leaves_only_the_top() {
        let stack = face_up(&[2, 3, 4, 8]);
        assert_eq!(stack.moveable_run(), cards_from_values(&[8]).as_slice());
    }

    #[test]
    fn full_chain_is_the_whole_face_up_region() {
        let stack = face_up(&[2, 3, 4, 5]);
        assert_eq!(stack.moveable_run(), cards_from_values(&[2, 3, 4, 5]).as_slice());
        assert!(stack.is_single_run());
    }

    #[test]
    fn run_stops_at_face_down_cards() {
        let stack = FieldStack::with_cards(cards_from_values(&[3, 4, 5]), 2).unwrap();
        assert_eq!(stack.moveable_run(), cards_from_values(&[4, 5]).as_slice());
        assert!(!stack.is_single_run());
    }

    #[test]
    fn run_is_empty_without_face_up_cards() {
        let stack = FieldStack::with_cards(cards_from_values(&[3, 4]), 0).unwrap();
        assert!(stack.moveable_run().is_empty());
        assert_eq!(stack.top_card(), TopCard::FaceDown);
        assert_eq!(FieldStack::new().top_card(), TopCard::Empty);
    }

    #[test]
    fn push_makes_cards_face_up() {
        let mut stack = FieldStack::with_cards(cards_from_values(&[1, 9]), 1).unwrap();
        stack.push_to_top(cards_from_values(&[10, 11]));
        assert_eq!(stack.face_up(), 3);
        assert_eq!(stack.top_card(), TopCard::Visible(Card::from_value(11)));
        stack.push_to_top(Vec::new());
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn pull_rejects_face_down_cards() {
        let mut stack = FieldStack::with_cards(cards_from_values(&[1, 2, 3]), 1).unwrap();
        assert_eq!(
            stack.pull_from_top(2),
            Err(StackError::NotEnoughFaceUp {
                requested: 2,
                face_up: 1
            })
        );
        assert_eq!(
            stack.pull_from_top(4),
            Err(StackError::NotEnoughCards {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(stack.pull_top(), Ok(Card::from_value(3)));
        assert_eq!(stack.face_up(), 0);
    }

    #[test]
    fn pull_preserves_order() {
        let mut stack = face_up(&[4, 5, 6]);
        assert_eq!(stack.pull_from_top(2).unwrap(), cards_from_values(&[5, 6]));
        assert_eq!(stack.cards(), cards_from_values(&[4]).as_slice());
    }

    #[test]
    fn reveal_and_conceal_are_bounded() {
        let mut stack = FieldStack::with_cards(cards_from_values(&[1, 2, 3]), 1).unwrap();
        stack.reveal(2).unwrap();
        assert_eq!(stack.face_up(), 3);
        assert!(matches!(
            stack.reveal(1),
            Err(StackError::NotEnoughFaceDown { .. })
        ));
        stack.conceal(3).unwrap();
        assert!(matches!(
            stack.conceal(1),
            Err(StackError::NotEnoughFaceUp { .. })
        ));
    }

    #[test]
    fn display_hides_face_down_cards() {
        let stack = FieldStack::with_cards(cards_from_values(&[0, 9, 12]), 2).unwrap();
        assert_eq!(stack.to_string(), "XX 10 K");
    }
}
