use crate::{initial_deck, riffle_repeated, Card, RngState};
use serde::{Deserialize, Serialize};

/// A shuffle algorithm with its bound parameters. The registry stores
/// these as plain data and dispatches through [`Strategy::generate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Strategy {
    /// Inside-out selection shuffle; unbiased, the ground truth the other
    /// strategies are measured against.
    Standard,
    /// Swap each position with a uniform pick over the FULL deck. The
    /// full-range pick (instead of the remaining suffix) makes this a
    /// deliberately biased negative control.
    NaiveSwap,
    Riffle {
        slip_range: usize,
        random_start: bool,
        passes: u32,
    },
}

impl Strategy {
    pub fn generate(&self, size: usize, rng: &mut RngState) -> Vec<Card> {
        match *self {
            Strategy::Standard => shuffle_standard(size, rng),
            Strategy::NaiveSwap => shuffle_naive_swap(size, rng),
            Strategy::Riffle {
                slip_range,
                random_start,
                passes,
            } => riffle_repeated(size, slip_range, random_start, passes, rng),
        }
    }
}

fn shuffle_standard(size: usize, rng: &mut RngState) -> Vec<Card> {
    let mut src = initial_deck(size);
    let mut live = size;
    let mut dst = Vec::with_capacity(size);
    for _ in 0..size {
        let pick = rng.next_index(live);
        dst.push(src[pick]);
        live -= 1;
        src[pick] = src[live];
    }
    dst
}

fn shuffle_naive_swap(size: usize, rng: &mut RngState) -> Vec<Card> {
    let mut deck = initial_deck(size);
    for i in 0..size {
        let ix = rng.next_index(size);
        deck.swap(i, ix);
    }
    deck
}
