// Event decision pipeline: analyze the options of a narrative event
// against the configured keyword priorities, then map the recommended
// option to an on-screen choice index.

mod analyzer;
mod choice;

pub use analyzer::*;
pub use choice::*;
