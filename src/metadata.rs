use crate::search::Cost;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetadata {
    pub num_nodes_visited: usize,
    pub cost: Cost,
    pub length: usize,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllOptimaMetadata {
    pub num_nodes_visited: usize,
    pub cost: Cost,
    pub num_cells: usize,
}
