use crate::conversation::{CoachRequest, CoachResponse, ConversationTurn};
use crate::error::CoachError;
use crate::stage::{Stage, SUCCESS_CRITERIA_PLACEHOLDER};

/// Advance the coaching conversation by one exchange.
///
/// Pure lookup into the stage table: the client's `current_stage` is honored
/// as-is regardless of what the history says, so advancement is entirely
/// client-driven. The input request is never mutated; the returned history
/// is a copy of the input with exactly one turn appended.
pub fn advance(request: &CoachRequest) -> Result<CoachResponse, CoachError> {
    let stage = Stage::parse_str(&request.current_stage)
        .ok_or_else(|| CoachError::InvalidStage(request.current_stage.clone()))?;
    let definition = stage.definition();

    // The one templated prompt in the flow: the answer to the
    // success-criteria question is folded into the conclusion's action plan.
    let message = if stage == Stage::SuccessCriteria {
        let conclusion = Stage::Conclusion.definition();
        if !conclusion.prompt.contains(SUCCESS_CRITERIA_PLACEHOLDER) {
            return Err(CoachError::MissingPlaceholder(Stage::Conclusion.as_str()));
        }
        conclusion
            .prompt
            .replace(SUCCESS_CRITERIA_PLACEHOLDER, &request.message)
    } else {
        definition.prompt.to_string()
    };

    let mut conversation_history = request.conversation_history.clone();
    conversation_history.push(ConversationTurn {
        user: request.message.clone(),
        coach: message.clone(),
    });

    Ok(CoachResponse {
        message,
        next_stage: definition.next_stage,
        conversation_history,
    })
}
