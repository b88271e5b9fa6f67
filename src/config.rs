use crate::search::Cost;

/// Cost of each kind of step. Searches reject a zero cost with
/// `Error::ZeroStepCost`, and a path whose cost would not fit in a `Cost`
/// is never taken.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCosts {
    pub advance: Cost,
    pub rotate: Cost,
}

impl Default for StepCosts {
    fn default() -> Self {
        Self {
            advance: 1,
            rotate: 1000,
        }
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub allow_solid_start: bool,
    pub step_costs: StepCosts,
    /// Give up with `Error::NodeLimitReached` once this many nodes have
    /// been finalized.
    pub max_nodes_visited: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_solid_start: true,
            step_costs: StepCosts::default(),
            max_nodes_visited: None,
        }
    }
}
