/// Card identity. Position in a deck is physical order: index 0 is the
/// bottom of the pile, the last index the top.
pub type Card = usize;

pub fn initial_deck(size: usize) -> Vec<Card> {
    (0..size).collect()
}

/// True iff `deck` is a permutation of `0..deck.len()`: every entry in
/// range and none repeated. The sole correctness gate for simulated
/// shuffles.
pub fn is_valid_shuffle(deck: &[Card]) -> bool {
    let mut seen = vec![false; deck.len()];
    for &card in deck {
        if card >= deck.len() || seen[card] {
            return false;
        }
        seen[card] = true;
    }
    true
}
