#![deny(clippy::all)]

//! Assigns tasks to capacity-bounded servers with the least number of
//! assignments, using the uniform-cost and A* searches from [searcher].

use std::str::FromStr;

use thiserror::Error;

pub mod allocation;
pub mod input;
pub mod render;

pub use allocation::{Assign, Assignment, ResourceAllocation};

/// Which search strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    UniformCost,
    AStar,
    Both,
}

impl Strategy {
    pub const NAMES: &'static [&'static str] = &["ucs", "astar", "both"];

    pub fn uniform_cost(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::Both)
    }

    pub fn astar(self) -> bool {
        matches!(self, Strategy::AStar | Strategy::Both)
    }
}

impl FromStr for Strategy {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ucs" => Ok(Strategy::UniformCost),
            "astar" => Ok(Strategy::AStar),
            "both" => Ok(Strategy::Both),
            other => Err(AllocationError::UnknownStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("At least one server is required")]
    NoServers,

    #[error("Invalid number {0:?}")]
    InvalidNumber(String, #[source] std::num::ParseIntError),

    #[error("Unknown search strategy {0:?}, expected one of ucs, astar or both")]
    UnknownStrategy(String),
}
