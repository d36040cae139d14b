// Training decision pipeline: score observations, then select one stat
// (or signal that nothing is worth training).

mod score;
mod selector;
mod strategy;

pub use score::*;
pub use selector::*;
pub use strategy::*;
