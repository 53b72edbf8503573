use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// One user-message/coach-prompt exchange recorded in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user: String,
    pub coach: String,
}

/// Incoming body for one coaching exchange.
///
/// `current_stage` stays a raw string at this layer so an unrecognized value
/// is reported by the engine as a client error with the offending value,
/// not rejected opaquely during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachRequest {
    pub message: String,
    #[serde(default = "default_stage")]
    pub current_stage: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

fn default_stage() -> String {
    Stage::Welcome.as_str().to_string()
}

/// Outcome of one coaching exchange. `next_stage` is `None` once the flow
/// has reached its conclusion; the history is the input history plus the
/// turn just exchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachResponse {
    pub message: String,
    pub next_stage: Option<Stage>,
    pub conversation_history: Vec<ConversationTurn>,
}
