// Race/training gating policy: year and goal based rules deciding when a
// race attempt takes priority over training, and the per-iteration lobby
// decision built on top of the selector and analyzer.

mod calendar;
mod goals;
mod lobby;

pub use calendar::*;
pub use goals::*;
pub use lobby::*;
