use crate::config::StepCosts;
use crate::grid::SolidGrid;
use crate::search::Cost;
use direction::CardinalDirection;
use grid_2d::Coord;

pub(crate) const NUM_FACINGS: usize = 4;

pub(crate) const FACINGS: [CardinalDirection; NUM_FACINGS] = [
    CardinalDirection::North,
    CardinalDirection::East,
    CardinalDirection::South,
    CardinalDirection::West,
];

pub(crate) fn facing_index(direction: CardinalDirection) -> usize {
    match direction {
        CardinalDirection::North => 0,
        CardinalDirection::East => 1,
        CardinalDirection::South => 2,
        CardinalDirection::West => 3,
    }
}

/// Offset of the cell directly ahead when facing `direction`. North is
/// towards row 0.
pub fn unit_coord(direction: CardinalDirection) -> Coord {
    match direction {
        CardinalDirection::North => Coord::new(0, -1),
        CardinalDirection::East => Coord::new(1, 0),
        CardinalDirection::South => Coord::new(0, 1),
        CardinalDirection::West => Coord::new(-1, 0),
    }
}

/// A single move in the facing state space.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Advance,
    RotateLeft,
    RotateRight,
}

impl Step {
    pub fn cost(self, costs: StepCosts) -> Cost {
        match self {
            Step::Advance => costs.advance,
            Step::RotateLeft | Step::RotateRight => costs.rotate,
        }
    }
}

/// A cell together with the direction faced while standing in it. This is
/// the unit of search: the same cell faced two ways is two distinct nodes.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacingNode {
    pub coord: Coord,
    pub direction: CardinalDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub node: FacingNode,
    pub step: Step,
    pub cost: Cost,
}

impl FacingNode {
    pub fn new(coord: Coord, direction: CardinalDirection) -> Self {
        Self { coord, direction }
    }

    pub fn step(self, step: Step) -> Self {
        match step {
            Step::Advance => Self::new(self.coord + unit_coord(self.direction), self.direction),
            Step::RotateLeft => Self::new(self.coord, self.direction.left90()),
            Step::RotateRight => Self::new(self.coord, self.direction.right90()),
        }
    }

    /// Inverse of `step`: the node from which taking `step` arrives here.
    pub fn unstep(self, step: Step) -> Self {
        match step {
            Step::Advance => Self::new(self.coord - unit_coord(self.direction), self.direction),
            Step::RotateLeft => Self::new(self.coord, self.direction.right90()),
            Step::RotateRight => Self::new(self.coord, self.direction.left90()),
        }
    }

    pub fn is_goal(self, goal: Coord) -> bool {
        self.coord == goal
    }

    /// Both rotations, then the advance if the cell ahead is open. Cells
    /// outside the grid count as solid.
    pub fn neighbours<G: SolidGrid>(
        self,
        grid: &G,
        costs: StepCosts,
    ) -> impl Iterator<Item = Transition> {
        let transition = |step: Step| Transition {
            node: self.step(step),
            step,
            cost: step.cost(costs),
        };
        let advance = transition(Step::Advance);
        let advance = if grid.is_solid_or_outside(advance.node.coord) {
            None
        } else {
            Some(advance)
        };
        [
            Some(transition(Step::RotateLeft)),
            Some(transition(Step::RotateRight)),
            advance,
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::terrain::*;
    use grid_2d::Size;

    #[test]
    fn rotations_are_inverse() {
        let node = FacingNode::new(Coord::new(2, 2), CardinalDirection::East);
        for &step in &[Step::Advance, Step::RotateLeft, Step::RotateRight] {
            assert_eq!(node.step(step).unstep(step), node);
        }
        assert_eq!(
            node.step(Step::RotateLeft).direction,
            CardinalDirection::North
        );
        assert_eq!(
            node.step(Step::RotateRight).direction,
            CardinalDirection::South
        );
    }

    #[test]
    fn advance_into_wall_is_excluded() {
        let mut terrain = Terrain::new(Size::new(3, 1));
        terrain.set(Coord::new(1, 0), Cell::Wall);
        let node = FacingNode::new(Coord::new(0, 0), CardinalDirection::East);
        let transitions = node
            .neighbours(&terrain, StepCosts::default())
            .collect::<Vec<_>>();
        assert_eq!(transitions.len(), 2);
        assert!(transitions.iter().all(|t| t.cost == 1000));

        let node = FacingNode::new(Coord::new(2, 0), CardinalDirection::East);
        assert_eq!(node.neighbours(&terrain, StepCosts::default()).count(), 2);

        let node = FacingNode::new(Coord::new(2, 0), CardinalDirection::West);
        let advance = node
            .neighbours(&terrain, StepCosts::default())
            .find(|t| t.step == Step::Advance);
        assert_eq!(advance, None);
    }

    #[test]
    fn three_transitions_in_open_space() {
        let terrain = Terrain::new(Size::new(3, 3));
        let node = FacingNode::new(Coord::new(1, 1), CardinalDirection::South);
        let transitions = node
            .neighbours(&terrain, StepCosts::default())
            .collect::<Vec<_>>();
        assert_eq!(transitions.len(), 3);
        assert_eq!(
            transitions[2],
            Transition {
                node: FacingNode::new(Coord::new(1, 2), CardinalDirection::South),
                step: Step::Advance,
                cost: 1,
            }
        );
        assert!(FacingNode::new(Coord::new(1, 1), CardinalDirection::West)
            .is_goal(Coord::new(1, 1)));
    }
}
