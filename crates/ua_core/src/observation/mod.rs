// Observation model: normalized value objects produced by the screen-reading
// layer, consumed once per decision and discarded.

mod event;
mod training;

pub use event::*;
pub use training::*;
