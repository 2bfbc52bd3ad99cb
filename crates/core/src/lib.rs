//! Shuffle-bias simulation core. Keep this crate free of IO and platform concerns.

pub mod deck;
pub mod error;
pub mod registry;
pub mod riffle;
pub mod rng;
pub mod shuffle;
pub mod stats;

pub use deck::*;
pub use error::*;
pub use registry::*;
pub use riffle::*;
pub use rng::*;
pub use shuffle::*;
pub use stats::*;
