use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num::Zero;

/// Numeric values which can be used as path costs and heuristics.
///
/// Costs only need to be partially ordered so that floating point
/// costs work; the search algorithms reject NaN before it can be
/// compared.
pub trait Cost: Copy + Debug + PartialOrd + Add<Output = Self> + Zero {}

impl<T> Cost for T where T: Copy + Debug + PartialOrd + Add<Output = T> + Zero {}

/// Provides an interface for conducting searches.
///
/// A problem describes a state space: where to start, which
/// actions are legal from each state, what they lead to, what
/// they cost and when to stop. The search algorithms never
/// look inside a state, they only hash and compare them.
pub trait Problem {
    /// A point in the search space. The state itself is used
    /// as the key to detect repeated states.
    type State: Debug + Clone + Eq + Hash;

    /// A transition from one state to another.
    type Action: Debug + Clone;

    type Cost: Cost;

    /// The state where the search begins.
    fn initial_state(&self) -> Self::State;

    /// All of the actions available from this state. An
    /// empty list marks a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action to a state, producing a new state.
    ///
    /// Returns `None` when the action can't be applied, which the
    /// search algorithms treat as a malformed problem.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Option<Self::State>;

    /// Is this state a goal?
    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of a single transition. Must not be negative.
    fn step_cost(&self, from: &Self::State, action: &Self::Action, to: &Self::State)
        -> Self::Cost;

    /// Accumulate the cost of a path by one transition.
    ///
    /// Overrides must never return less than `so_far`.
    fn path_cost(
        &self,
        so_far: Self::Cost,
        from: &Self::State,
        action: &Self::Action,
        to: &Self::State,
    ) -> Self::Cost {
        so_far + self.step_cost(from, action, to)
    }

    /// Best guess of the remaining cost from this state to the
    /// nearest goal, used by A*.
    ///
    /// The guess must never overestimate the true cost, but it
    /// does not need to be consistent between neighboring states.
    fn heuristic(&self, _state: &Self::State) -> Self::Cost {
        Self::Cost::zero()
    }
}
