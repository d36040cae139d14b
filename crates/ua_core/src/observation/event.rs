// Event dialog observation types
use serde::{Deserialize, Serialize};

/// One choice of a narrative event, looked up from the event database by
/// name. `reward_text` may span multiple lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    /// Semantic label, e.g. "top option", "bottom option", "option3".
    pub name: String,
    /// Free-text reward description from the event database.
    pub reward_text: String,
}

impl EventOption {
    pub fn new(name: impl Into<String>, reward_text: impl Into<String>) -> Self {
        Self { name: name.into(), reward_text: reward_text.into() }
    }
}
