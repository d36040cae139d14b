// JSON API for the screen-reading/input layer
//
// Each entry point takes raw JSON strings and returns a JSON string, so
// the caller needs no knowledge of the core types. Errors come back as
// plain strings suitable for logging on the other side of the boundary.

mod event_json;
mod training_json;

pub use event_json::*;
pub use training_json::*;

/// Wire format version checked on every request.
pub const SCHEMA_VERSION: u8 = 1;
