use std::fmt;

use serde::{Deserialize, Serialize};

/// One step in the fixed coaching conversation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Welcome,
    RiskiestAssumption,
    AssumptionValidation,
    ExperimentDesign,
    Prototyping,
    SuccessCriteria,
    Conclusion,
}

/// Prompt text and successor stage for one entry of the coaching flow.
/// `next_stage` is `None` only for the terminal `conclusion` stage.
#[derive(Debug, Clone, Copy)]
pub struct StageDefinition {
    pub prompt: &'static str,
    pub next_stage: Option<Stage>,
}

/// Token replaced with the user's answer inside the conclusion prompt.
pub const SUCCESS_CRITERIA_PLACEHOLDER: &str = "{success_criteria}";

impl Stage {
    pub const ALL: &[Stage] = &[
        Stage::Welcome,
        Stage::RiskiestAssumption,
        Stage::AssumptionValidation,
        Stage::ExperimentDesign,
        Stage::Prototyping,
        Stage::SuccessCriteria,
        Stage::Conclusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Welcome => "welcome",
            Stage::RiskiestAssumption => "riskiest_assumption",
            Stage::AssumptionValidation => "assumption_validation",
            Stage::ExperimentDesign => "experiment_design",
            Stage::Prototyping => "prototyping",
            Stage::SuccessCriteria => "success_criteria",
            Stage::Conclusion => "conclusion",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Welcome => "Welcome",
            Stage::RiskiestAssumption => "Riskiest Assumption",
            Stage::AssumptionValidation => "Assumption Validation",
            Stage::ExperimentDesign => "Experiment Design",
            Stage::Prototyping => "Prototyping",
            Stage::SuccessCriteria => "Success Criteria",
            Stage::Conclusion => "Conclusion",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "welcome" => Some(Stage::Welcome),
            "riskiest_assumption" => Some(Stage::RiskiestAssumption),
            "assumption_validation" => Some(Stage::AssumptionValidation),
            "experiment_design" => Some(Stage::ExperimentDesign),
            "prototyping" => Some(Stage::Prototyping),
            "success_criteria" => Some(Stage::SuccessCriteria),
            "conclusion" => Some(Stage::Conclusion),
            _ => None,
        }
    }

    /// Look up this stage's entry in the coaching flow table.
    ///
    /// The table is a single linear chain from `welcome` to `conclusion`;
    /// every stage appears exactly once.
    pub fn definition(&self) -> StageDefinition {
        match self {
            Stage::Welcome => StageDefinition {
                prompt: "Hey there! I'm your MVP Coach. Let's validate your AI product idea together. What's your AI product about?",
                next_stage: Some(Stage::RiskiestAssumption),
            },
            Stage::RiskiestAssumption => StageDefinition {
                prompt: "Great! What do you think is the riskiest assumption about your idea? (What's the most uncertain part that if proven wrong would make your idea fail?)",
                next_stage: Some(Stage::AssumptionValidation),
            },
            Stage::AssumptionValidation => StageDefinition {
                prompt: "Interesting. If this assumption turns out to be false, would your product still work? (yes/no)",
                next_stage: Some(Stage::ExperimentDesign),
            },
            Stage::ExperimentDesign => StageDefinition {
                prompt: "Let's test this assumption. What's the simplest way you could validate this? (Describe in 1-2 sentences)",
                next_stage: Some(Stage::Prototyping),
            },
            Stage::Prototyping => StageDefinition {
                prompt: "What tools or resources do you have available to build a quick prototype?",
                next_stage: Some(Stage::SuccessCriteria),
            },
            Stage::SuccessCriteria => StageDefinition {
                prompt: "What would success look like for this test? (What result would validate your assumption?)",
                next_stage: Some(Stage::Conclusion),
            },
            Stage::Conclusion => StageDefinition {
                prompt: "Awesome! Here's your action plan:\n1. Build the simple prototype you described\n2. Run your validation test\n3. Measure: {success_criteria}\nYou can do this in the next 24 hours! Want to save this plan? (yes/no)",
                next_stage: None,
            },
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
