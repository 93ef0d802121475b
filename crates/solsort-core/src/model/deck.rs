use crate::model::card::Card;
use crate::model::error::StackError;
use crate::model::rank::Rank;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Face-down draw pile. The top of the deck is the end of `cards`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// `size` cards cycling through the thirteen reference ranks.
    pub fn reference(size: usize) -> Self {
        let cards = Rank::REFERENCE
            .iter()
            .copied()
            .cycle()
            .take(size)
            .map(Card::new)
            .collect();
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Self {
        let mut deck = Self::from_cards(cards);
        deck.shuffle(rng);
        deck
    }

    pub fn shuffled_with_seed(cards: Vec<Card>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(cards, &mut rng)
    }

    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Places `cards` under the pile, farthest from being drawn. Their
    /// relative order is kept.
    pub fn push_to_bottom(&mut self, cards: Vec<Card>) {
        if cards.is_empty() {
            tracing::warn!(target: "solsort_core::stack", "pushed zero cards under the deck");
            return;
        }
        self.cards.splice(0..0, cards);
    }

    /// Removes the `n` cards nearest to being drawn, returned bottom to top.
    pub fn pull_from_top(&mut self, n: usize) -> Result<Vec<Card>, StackError> {
        if n > self.cards.len() {
            return Err(StackError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        if n == 0 {
            tracing::warn!(target: "solsort_core::stack", "pulled zero cards from the deck");
        }
        let at = self.cards.len() - n;
        Ok(self.cards.split_off(at))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
