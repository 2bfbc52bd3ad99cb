use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("strategy {strategy} produced an invalid permutation at sample {sample}")]
    InvalidPermutation { strategy: String, sample: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("duplicate strategy name: {0}")]
    DuplicateStrategy(String),
}
