use crate::{initial_deck, Card, RngState};

/// One riffle pass: cut the deck into a left half (first half, rounded
/// down) and a right half, then alternately slip a random run of
/// 1..=slip_range cards from each side into the output until both sides
/// are spent. With `random_start` set, a single coin flip before the loop
/// lets the right half go first.
pub fn riffle_once(
    deck: &[Card],
    slip_range: usize,
    random_start: bool,
    rng: &mut RngState,
) -> Vec<Card> {
    let mut out = Vec::with_capacity(deck.len());
    riffle_into(deck, &mut out, slip_range, random_start, rng);
    out
}

fn riffle_into(
    deck: &[Card],
    out: &mut Vec<Card>,
    slip_range: usize,
    random_start: bool,
    rng: &mut RngState,
) {
    let slip = slip_range.max(1);
    let (left, right) = deck.split_at(deck.len() / 2);
    out.clear();
    let mut lpos = 0;
    let mut rpos = 0;
    let mut skip_left = random_start && rng.coin_flip();
    while lpos < left.len() || rpos < right.len() {
        if skip_left {
            skip_left = false;
        } else if lpos < left.len() {
            let run = (1 + rng.next_index(slip)).min(left.len() - lpos);
            out.extend_from_slice(&left[lpos..lpos + run]);
            lpos += run;
        }
        if rpos < right.len() {
            let run = (1 + rng.next_index(slip)).min(right.len() - rpos);
            out.extend_from_slice(&right[rpos..rpos + run]);
            rpos += run;
        }
    }
}

/// Riffles the canonical deck `passes` times, threading each output back
/// in as the next input. Two buffers are swapped between passes so the
/// repeated presets stay allocation-free per pass.
pub fn riffle_repeated(
    size: usize,
    slip_range: usize,
    random_start: bool,
    passes: u32,
    rng: &mut RngState,
) -> Vec<Card> {
    let mut deck = initial_deck(size);
    let mut scratch = Vec::with_capacity(size);
    for _ in 0..passes {
        riffle_into(&deck, &mut scratch, slip_range, random_start, rng);
        std::mem::swap(&mut deck, &mut scratch);
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_valid_shuffle;

    #[test]
    fn perfect_interleave_alternates_halves() {
        let mut rng = RngState::from_seed(0);
        let out = riffle_once(&initial_deck(6), 1, false, &mut rng);
        assert_eq!(out, vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn odd_deck_gives_the_right_half_the_extra_card() {
        let mut rng = RngState::from_seed(0);
        let out = riffle_once(&initial_deck(5), 1, false, &mut rng);
        assert_eq!(out, vec![0, 2, 1, 3, 4]);
    }

    #[test]
    fn zero_slip_range_is_treated_as_one() {
        let mut rng = RngState::from_seed(3);
        let out = riffle_once(&initial_deck(8), 0, false, &mut rng);
        assert_eq!(out, vec![0, 4, 1, 5, 2, 6, 3, 7]);
    }

    #[test]
    fn empty_and_single_card_decks_pass_through() {
        let mut rng = RngState::from_seed(9);
        assert!(riffle_once(&[], 3, true, &mut rng).is_empty());
        assert_eq!(riffle_once(&[0], 3, true, &mut rng), vec![0]);
    }

    #[test]
    fn repeated_riffle_stays_a_permutation() {
        let mut rng = RngState::from_seed(11);
        let out = riffle_repeated(52, 3, true, 7, &mut rng);
        assert_eq!(out.len(), 52);
        assert!(is_valid_shuffle(&out));
    }
}
