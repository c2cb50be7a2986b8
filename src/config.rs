use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: usize = 3;

/// Evaluator settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// How many of the highest bids to keep in the ranking
    pub top_n: usize,
}

impl EvaluatorConfig {
    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}
