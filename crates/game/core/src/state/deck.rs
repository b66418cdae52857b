//! Draw pile plus discard pile with reshuffle-on-empty.

use crate::env::RngOracle;

/// A shared card deck.
///
/// The draw pile is stored bottom-first so drawing pops from the end. Drawn
/// cards go straight to the discard pile; when the draw pile runs dry the
/// discard is shuffled back in. If both piles are empty a draw yields nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck<C> {
    draw_pile: Vec<C>,
    discard: Vec<C>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self {
            draw_pile: Vec::new(),
            discard: Vec::new(),
        }
    }
}

impl<C: Clone> Deck<C> {
    /// Builds a deck whose first card is on top.
    pub fn from_top(cards: Vec<C>) -> Self {
        let mut draw_pile = cards;
        draw_pile.reverse();
        Self {
            draw_pile,
            discard: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// True when neither pile holds a card.
    pub fn is_exhausted(&self) -> bool {
        self.draw_pile.is_empty() && self.discard.is_empty()
    }

    /// Returns true when drawing now requires a reshuffle first.
    pub fn needs_refill(&self) -> bool {
        self.needs_refill_for(|_| true)
    }

    /// Returns true when only the discard pile holds a card matching `eligible`.
    pub fn needs_refill_for(&self, eligible: impl Fn(&C) -> bool) -> bool {
        !self.draw_pile.iter().any(&eligible) && self.discard.iter().any(&eligible)
    }

    /// Shuffles the discard pile back under the draw pile.
    pub fn refill<R>(&mut self, rng: &R, seed: u64)
    where
        R: RngOracle + ?Sized,
    {
        let mut recycled = std::mem::take(&mut self.discard);
        shuffle(&mut recycled, rng, seed);
        recycled.append(&mut self.draw_pile);
        self.draw_pile = recycled;
    }

    pub fn peek(&self) -> Option<&C> {
        self.draw_pile.last()
    }

    /// Takes the top card, moving a copy to the discard pile.
    pub fn draw(&mut self) -> Option<C> {
        let card = self.draw_pile.pop()?;
        self.discard.push(card.clone());
        Some(card)
    }

    /// Takes the topmost card matching `eligible`; skipped cards stay in place.
    pub fn draw_first_where(&mut self, eligible: impl Fn(&C) -> bool) -> Option<C> {
        let index = self.draw_pile.iter().rposition(eligible)?;
        let card = self.draw_pile.remove(index);
        self.discard.push(card.clone());
        Some(card)
    }

    /// Returns true if any card in either pile matches `eligible`.
    pub fn any(&self, eligible: impl Fn(&C) -> bool) -> bool {
        self.draw_pile.iter().chain(self.discard.iter()).any(eligible)
    }

    pub fn cards(&self) -> impl Iterator<Item = &C> {
        self.draw_pile.iter().rev()
    }
}

/// Fisher-Yates driven by the stateless RNG oracle.
fn shuffle<C, R>(cards: &mut [C], rng: &R, seed: u64)
where
    R: RngOracle + ?Sized,
{
    for i in (1..cards.len()).rev() {
        let j = rng.range(seed.wrapping_add(i as u64), 0, i as u32) as usize;
        cards.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn draws_from_top_and_discards() {
        let mut deck = Deck::from_top(vec!["a", "b", "c"]);

        assert_eq!(deck.peek(), Some(&"a"));
        assert_eq!(deck.draw(), Some("a"));
        assert_eq!(deck.draw(), Some("b"));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.discard_len(), 2);
    }

    #[test]
    fn refill_recycles_discard_when_empty() {
        let mut deck = Deck::from_top(vec![1, 2]);
        deck.draw();
        deck.draw();
        assert!(deck.needs_refill());

        deck.refill(&PcgRng, 42);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.discard_len(), 0);

        let mut drawn = vec![deck.draw().unwrap(), deck.draw().unwrap()];
        drawn.sort();
        assert_eq!(drawn, vec![1, 2]);
    }

    #[test]
    fn exhausted_deck_draws_nothing() {
        let mut deck: Deck<u8> = Deck::default();
        assert!(deck.is_exhausted());
        assert!(!deck.needs_refill());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn refill_for_eligible_cards_in_discard() {
        let mut deck = Deck::from_top(vec![1, 2]);
        assert_eq!(deck.draw_first_where(|card| card % 2 == 0), Some(2));
        assert!(!deck.needs_refill());
        assert!(deck.needs_refill_for(|card| card % 2 == 0));
        assert!(!deck.needs_refill_for(|card| card % 2 == 1));

        deck.refill(&PcgRng, 3);
        assert_eq!(deck.draw_first_where(|card| card % 2 == 0), Some(2));
    }

    #[test]
    fn draw_first_where_leaves_ineligible_cards() {
        let mut deck = Deck::from_top(vec![1, 2, 3, 4]);

        assert_eq!(deck.draw_first_where(|card| card % 2 == 0), Some(2));
        assert_eq!(deck.cards().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(deck.draw_first_where(|card| *card > 10), None);
    }
}
