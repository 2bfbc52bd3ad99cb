use crate::{is_valid_shuffle, EvalError, RngState, Strategy};

/// The fixed output position every experiment observes: the bottom of the
/// shuffled deck, i.e. the last card dealt.
pub const OBSERVED_POSITION: usize = 0;

/// Samples `strategy` `samples` times and returns the empirical
/// probability mass of each card landing at `position`. Any invalid
/// permutation aborts the experiment; a biased-but-valid permutation is
/// data, an invalid one is a shuffler bug.
pub fn position_statistics(
    position: usize,
    strategy: Strategy,
    deck_size: usize,
    samples: usize,
    rng: &mut RngState,
) -> Result<Vec<f64>, EvalError> {
    if deck_size == 0 {
        return Err(EvalError::InvalidConfig(
            "deck size must be at least 1".to_string(),
        ));
    }
    if samples == 0 {
        return Err(EvalError::InvalidConfig(
            "sample count must be at least 1".to_string(),
        ));
    }
    if position >= deck_size {
        return Err(EvalError::InvalidConfig(format!(
            "observed position {position} outside deck of size {deck_size}"
        )));
    }

    let mut counts = vec![0u64; deck_size];
    for sample in 0..samples {
        let deck = strategy.generate(deck_size, rng);
        if !is_valid_shuffle(&deck) {
            return Err(EvalError::InvalidPermutation {
                strategy: format!("{strategy:?}"),
                sample,
            });
        }
        counts[deck[position]] += 1;
    }
    Ok(counts
        .iter()
        .map(|&count| count as f64 / samples as f64)
        .collect())
}

/// Sum of squared deviations of the observed-position mass from the ideal
/// uniform 1/deck_size. Zero only in the infinite-sample limit of a
/// perfectly uniform shuffler; lower is better.
pub fn position_variance(
    strategy: Strategy,
    deck_size: usize,
    samples: usize,
    rng: &mut RngState,
) -> Result<f64, EvalError> {
    let prob = position_statistics(OBSERVED_POSITION, strategy, deck_size, samples, rng)?;
    let expected = 1.0 / deck_size as f64;
    Ok(prob
        .iter()
        .map(|p| (expected - p) * (expected - p))
        .sum())
}
