//! @ai:module:intent Classify result files into named experiment scenarios
//! @ai:module:layer domain
//! @ai:module:public_api Scenario
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Scenario a result file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scenario {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "Low demand")]
    LowDemand,
    #[serde(rename = "High demand")]
    HighDemand,
    #[serde(rename = "High rej. costs")]
    HighRejectionCosts,
    #[serde(rename = "Low rej. costs")]
    LowRejectionCosts,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Base,
        Scenario::LowDemand,
        Scenario::HighDemand,
        Scenario::HighRejectionCosts,
        Scenario::LowRejectionCosts,
    ];

    /// @ai:intent Classify by penalty and inter-arrival time
    /// @ai:post first match wins: arrival 30, arrival 20, penalty 3600, penalty 1800, else base
    /// @ai:effects pure
    pub fn classify(penalty: u32, arrival_rate: u32) -> Self {
        if arrival_rate == 30 {
            Scenario::LowDemand
        } else if arrival_rate == 20 {
            Scenario::HighDemand
        } else if penalty == 3600 {
            Scenario::HighRejectionCosts
        } else if penalty == 1800 {
            Scenario::LowRejectionCosts
        } else {
            Scenario::Base
        }
    }

    /// @ai:intent Label used in rendered tables
    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Base => "base",
            Scenario::LowDemand => "Low demand",
            Scenario::HighDemand => "High demand",
            Scenario::HighRejectionCosts => "High rej. costs",
            Scenario::LowRejectionCosts => "Low rej. costs",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
