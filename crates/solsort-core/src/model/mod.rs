pub mod card;
pub mod deck;
pub mod error;
pub mod field;
pub mod foundation;
pub mod hand;
pub mod rank;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_support;
