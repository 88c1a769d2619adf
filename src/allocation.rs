//! Assigning tasks to servers, one task at a time.

use std::fmt;

use searcher::Problem;

use crate::AllocationError;

/// Which server each task is assigned to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment(Vec<Option<usize>>);

impl Assignment {
    fn empty(tasks: usize) -> Self {
        Assignment(vec![None; tasks])
    }

    pub fn server(&self, task: usize) -> Option<usize> {
        self.0.get(task).copied().flatten()
    }

    pub fn unassigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(t, _)| t)
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self
            .0
            .iter()
            .map(|s| match s {
                Some(server) => server.to_string(),
                None => "-".to_string(),
            })
            .collect();
        write!(f, "[{}]", slots.join(", "))
    }
}

/// Place `task` on `server`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assign {
    pub task: usize,
    pub server: usize,
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.task, self.server)
    }
}

/// Servers with fixed capacities, and tasks with fixed requirements.
///
/// A task may only be placed on a server which still has room for
/// it. Every assignment costs 1, so the cheapest solution is simply
/// any assignment of every task.
#[derive(Debug, Clone)]
pub struct ResourceAllocation {
    servers: Vec<u32>,
    tasks: Vec<u32>,
}

impl ResourceAllocation {
    pub fn new(servers: &[u32], tasks: &[u32]) -> Result<Self, AllocationError> {
        if servers.is_empty() {
            return Err(AllocationError::NoServers);
        }

        Ok(Self {
            servers: servers.to_vec(),
            tasks: tasks.to_vec(),
        })
    }

    pub fn servers(&self) -> &[u32] {
        &self.servers
    }

    pub fn tasks(&self) -> &[u32] {
        &self.tasks
    }

    fn max_capacity(&self) -> u32 {
        self.servers.iter().copied().max().unwrap_or(0)
    }

    /// Current load on each server.
    pub fn server_loads(&self, state: &Assignment) -> Vec<u32> {
        let mut loads = vec![0u32; self.servers.len()];
        for (task, server) in state.0.iter().enumerate() {
            if let Some(server) = server {
                loads[*server] = loads[*server].saturating_add(self.tasks[task]);
            }
        }
        loads
    }

    /// A necessary (but not sufficient) condition for a solution to exist:
    /// every task fits on some server, and the tasks fit in total.
    pub fn capacity_feasible(&self) -> bool {
        let max = self.max_capacity();
        let total_tasks: u64 = self.tasks.iter().map(|&t| u64::from(t)).sum();
        let total_servers: u64 = self.servers.iter().map(|&s| u64::from(s)).sum();

        self.tasks.iter().all(|&t| t <= max) && total_tasks <= total_servers
    }
}

impl Problem for ResourceAllocation {
    type State = Assignment;
    type Action = Assign;
    type Cost = f64;

    fn initial_state(&self) -> Assignment {
        Assignment::empty(self.tasks.len())
    }

    fn actions(&self, state: &Assignment) -> Vec<Assign> {
        let loads = self.server_loads(state);
        let loads = &loads;

        state
            .unassigned()
            .flat_map(|task| {
                let requirement = self.tasks[task];
                (0..self.servers.len())
                    .filter(move |&server| {
                        loads[server]
                            .checked_add(requirement)
                            .map_or(false, |load| load <= self.servers[server])
                    })
                    .map(move |server| Assign { task, server })
            })
            .collect()
    }

    fn result(&self, state: &Assignment, action: &Assign) -> Option<Assignment> {
        if action.server >= self.servers.len() {
            return None;
        }

        match state.0.get(action.task) {
            Some(None) => {
                let mut next = state.clone();
                next.0[action.task] = Some(action.server);
                Some(next)
            }
            _ => None,
        }
    }

    fn goal_test(&self, state: &Assignment) -> bool {
        state.is_complete()
    }

    fn step_cost(&self, _from: &Assignment, _action: &Assign, _to: &Assignment) -> f64 {
        1.0
    }

    /// Remaining requirements, spread over the largest server.
    ///
    /// Each step places exactly one task, and no task is larger than the
    /// largest server in a solvable instance, so this never exceeds the
    /// number of tasks left.
    fn heuristic(&self, state: &Assignment) -> f64 {
        let remaining: u64 = state
            .unassigned()
            .map(|task| u64::from(self.tasks[task]))
            .sum();
        let max = self.max_capacity();

        if remaining == 0 || max == 0 {
            0.0
        } else {
            remaining as f64 / f64::from(max)
        }
    }
}
