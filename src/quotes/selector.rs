use super::QuoteCollection;
use crate::error::{QuoteError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Picks quotes uniformly at random from a [`QuoteCollection`].
///
/// The generator is owned by the selector and seeded once when it is built,
/// so consecutive picks come from one stream instead of being reseeded.
#[derive(Debug, Clone)]
pub struct QuoteSelector<R = StdRng> {
    rng: R,
}

impl QuoteSelector<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuoteSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws an index from `[0, len)`.
    pub fn pick_index(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(QuoteError::EmptyCollection);
        }
        Ok(self.rng.random_range(0..len))
    }

    pub fn select<'a>(&mut self, quotes: &'a QuoteCollection) -> Result<SelectedQuote<'a>> {
        let index = self.pick_index(quotes.len())?;
        let text = quotes.get(index).ok_or(QuoteError::EmptyCollection)?;
        Ok(SelectedQuote { index, text })
    }
}

/// A chosen line, displayed wrapped in double quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedQuote<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl SelectedQuote<'_> {
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectedQuote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.text)
    }
}
