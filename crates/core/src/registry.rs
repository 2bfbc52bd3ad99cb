use crate::{position_variance, EvalError, RngState, Strategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvalRecord {
    pub name: String,
    pub variance: f64,
}

/// Ordered, uniquely named strategy registry. Insertion order is output
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    entries: Vec<(String, Strategy)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed strategy line-up the driver evaluates.
    pub fn presets() -> Self {
        let named: [(&str, Strategy); 8] = [
            ("standard", Strategy::Standard),
            ("naive", Strategy::NaiveSwap),
            (
                "perfect1",
                Strategy::Riffle {
                    slip_range: 1,
                    random_start: false,
                    passes: 1,
                },
            ),
            (
                "perfect7",
                Strategy::Riffle {
                    slip_range: 1,
                    random_start: false,
                    passes: 7,
                },
            ),
            (
                "loose1",
                Strategy::Riffle {
                    slip_range: 1,
                    random_start: true,
                    passes: 1,
                },
            ),
            (
                "loose7",
                Strategy::Riffle {
                    slip_range: 1,
                    random_start: true,
                    passes: 7,
                },
            ),
            (
                "slip3x4",
                Strategy::Riffle {
                    slip_range: 3,
                    random_start: true,
                    passes: 4,
                },
            ),
            (
                "slip5x7",
                Strategy::Riffle {
                    slip_range: 5,
                    random_start: true,
                    passes: 7,
                },
            ),
        ];
        Self {
            entries: named
                .into_iter()
                .map(|(name, strategy)| (name.to_string(), strategy))
                .collect(),
        }
    }

    pub fn register(&mut self, name: &str, strategy: Strategy) -> Result<(), EvalError> {
        if self.entries.iter().any(|(existing, _)| existing == name) {
            return Err(EvalError::DuplicateStrategy(name.to_string()));
        }
        self.entries.push((name.to_string(), strategy));
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs the positional-bias experiment once per entry, in registry
    /// order. The first error aborts the whole evaluation; no partial
    /// results are returned.
    pub fn evaluate(
        &self,
        deck_size: usize,
        samples: usize,
        rng: &mut RngState,
    ) -> Result<Vec<EvalRecord>, EvalError> {
        let mut records = Vec::with_capacity(self.entries.len());
        for (name, strategy) in &self.entries {
            let variance = position_variance(*strategy, deck_size, samples, rng)?;
            records.push(EvalRecord {
                name: name.clone(),
                variance,
            });
        }
        Ok(records)
    }
}
