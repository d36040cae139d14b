// Event analysis JSON API
use serde::{Deserialize, Serialize};

use crate::config::EventPriorities;
use crate::error::CoreError;
use crate::event::{analyze_event_options, map_choice_number, EventAnalysis, MappedChoice};
use crate::observation::EventOption;

use super::SCHEMA_VERSION;

/// An event dialog's options, looked up from the event database by the
/// observation layer.
#[derive(Debug, Deserialize)]
pub struct EventAnalyzeRequest {
    pub schema_version: u8,
    /// Options in first-seen (top-to-bottom) order.
    pub options: Vec<EventOption>,
    /// How many choice buttons the screen actually shows; when present,
    /// the recommendation is mapped to a tap index.
    #[serde(default)]
    pub choices_on_screen: Option<usize>,
}

/// The full analysis plus, when requested, the on-screen tap index.
#[derive(Debug, Serialize)]
pub struct EventAnalyzeResponse {
    pub schema_version: u8,
    pub analysis: EventAnalysis,
    pub choice: Option<MappedChoice>,
}

/// Analyze an event's options against the keyword priorities and map the
/// recommended option to a choice index.
pub fn analyze_event_json(request_json: &str, priorities_json: &str) -> Result<String, String> {
    let request: EventAnalyzeRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid event request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchemaVersion(request.schema_version).to_string());
    }

    let priorities: EventPriorities = serde_json::from_str(priorities_json)
        .map_err(|e| format!("Invalid priorities JSON: {}", e))?;

    let analysis = analyze_event_options(&request.options, &priorities);

    let choice = request.choices_on_screen.map(|count| match &analysis.recommended_option {
        Some(name) => map_choice_number(name, count),
        // Nothing recommended: default to the first choice.
        None => map_choice_number("", count),
    });

    let response = EventAnalyzeResponse { schema_version: SCHEMA_VERSION, analysis, choice };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
