use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::error::{FoundationError, StackError};
use crate::model::field::FieldStack;
use crate::model::foundation::FoundationStack;
use crate::model::hand::Hand;
use crate::model::rules::RuleSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One table: the deck, the hand, the field columns and the foundations.
#[derive(Debug, Clone)]
pub struct Game {
    rules: RuleSet,
    deck: Deck,
    hand: Hand,
    field: Vec<FieldStack>,
    foundations: Vec<FoundationStack>,
}

impl Game {
    /// Puts every input card in the deck. Nothing is dealt until `setup`.
    pub fn new(cards: Vec<Card>, rules: RuleSet) -> Self {
        Self {
            deck: Deck::from_cards(cards),
            hand: Hand::new(&rules),
            field: vec![FieldStack::new(); rules.field_columns],
            foundations: vec![FoundationStack::new(); rules.foundations],
            rules,
        }
    }

    pub fn with_seed(cards: Vec<Card>, rules: RuleSet, seed: u64) -> Result<Self, StackError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Self::new(cards, rules);
        game.setup(&mut rng)?;
        Ok(game)
    }

    /// Assembles a game from already-built piles.
    pub fn from_parts(
        rules: RuleSet,
        deck: Deck,
        hand: Hand,
        field: Vec<FieldStack>,
        foundations: Vec<FoundationStack>,
    ) -> Self {
        Self {
            rules,
            deck,
            hand,
            field,
            foundations,
        }
    }

    /// Shuffle, deal the field triangularly, then draw the first hand.
    pub fn setup<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), StackError> {
        self.deck.shuffle(rng);
        self.deal()?;
        self.hand.draw(&mut self.deck)?;
        tracing::debug!(
            target: "solsort_core::game",
            dealt = self.field_card_count(),
            hand = self.hand.len(),
            deck = self.deck.len(),
            "table set up"
        );
        Ok(())
    }

    /// Column `i` receives `i + 1` face-up cards while the deck lasts.
    fn deal(&mut self) -> Result<(), StackError> {
        for (index, column) in self.field.iter_mut().enumerate() {
            let take = (index + 1).min(self.deck.len());
            if take == 0 {
                break;
            }
            column.push_to_top(self.deck.pull_from_top(take)?);
        }
        Ok(())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn field(&self) -> &[FieldStack] {
        &self.field
    }

    pub fn column(&self, index: usize) -> Result<&FieldStack, StackError> {
        let columns = self.field.len();
        self.field
            .get(index)
            .ok_or(StackError::ColumnOutOfRange { index, columns })
    }

    pub fn column_mut(&mut self, index: usize) -> Result<&mut FieldStack, StackError> {
        let columns = self.field.len();
        self.field
            .get_mut(index)
            .ok_or(StackError::ColumnOutOfRange { index, columns })
    }

    /// Mutable access to two distinct columns at once.
    pub fn column_pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(&mut FieldStack, &mut FieldStack), StackError> {
        let columns = self.field.len();
        for index in [first, second] {
            if index >= columns {
                return Err(StackError::ColumnOutOfRange { index, columns });
            }
        }
        if first == second {
            return Err(StackError::ColumnOutOfRange {
                index: second,
                columns,
            });
        }
        if first < second {
            let (low, high) = self.field.split_at_mut(second);
            Ok((&mut low[first], &mut high[0]))
        } else {
            let (low, high) = self.field.split_at_mut(first);
            Ok((&mut high[0], &mut low[second]))
        }
    }

    pub fn foundations(&self) -> &[FoundationStack] {
        &self.foundations
    }

    pub fn foundations_mut(&mut self) -> &mut [FoundationStack] {
        &mut self.foundations
    }

    pub fn field_card_count(&self) -> usize {
        self.field.iter().map(FieldStack::len).sum()
    }

    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.field_card_count()
            + self.foundations.iter().map(FoundationStack::len).sum::<usize>()
    }

    /// Nothing is left to draw or hold, and the field is down to at most
    /// one column that forms a single face-up run.
    pub fn is_won(&self) -> bool {
        if !self.deck.is_empty() || !self.hand.is_empty() {
            return false;
        }
        let mut occupied = self.field.iter().filter(|column| !column.is_empty());
        match (occupied.next(), occupied.next()) {
            (None, _) => true,
            (Some(column), None) => column.is_single_run(),
            (Some(_), Some(_)) => false,
        }
    }

    /// Moves the finished run onto the first foundation. Returns `false`
    /// without touching anything when the game is not won.
    pub fn collect_foundation(&mut self) -> Result<bool, FoundationError> {
        if !self.is_won() {
            return Ok(false);
        }
        let Some(column) = self.field.iter_mut().find(|column| !column.is_empty()) else {
            return Ok(true);
        };
        let run = column.pull_from_top(column.len())?;
        let foundation = self.foundations.first_mut().ok_or(StackError::Empty)?;
        foundation.push_to_top(&run)?;
        Ok(true)
    }

    /// Foundation contents in stack order, each bottom to top.
    pub fn foundation_output(&self) -> Vec<Card> {
        self.foundations
            .iter()
            .flat_map(|foundation| foundation.cards().iter().copied())
            .collect()
    }

    /// Hash of every pile, used to spot positions that repeat.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.deck.hash(&mut hasher);
        self.hand.cards().hash(&mut hasher);
        self.field.hash(&mut hasher);
        self.foundations.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--------- Foundations ---------")?;
        for foundation in &self.foundations {
            let cards = foundation
                .cards()
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "[{cards}]")?;
        }
        writeln!(f, "--------- Field ---------------")?;
        for (index, column) in self.field.iter().enumerate() {
            writeln!(f, "{index}: {column}")?;
        }
        writeln!(f, "--------- Hand ----------------")?;
        let hand = self
            .hand
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "{hand}")?;
        write!(f, "--------- Deck: {} face-down", self.deck.len())
    }
}
