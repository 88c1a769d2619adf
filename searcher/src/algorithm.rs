//! Provides the building blocks for search algorithms

use std::cmp::Ordering;
use std::rc::Rc;
use std::time;

use log::{debug, info};
use num::Zero;

use self::cache::Explored;
use crate::errors::{Result, SearchError};
use crate::frontier::PriorityFrontier;
use crate::node::SearchNode;
use crate::report::{SearchReport, Solution};
use crate::traits::Problem;

pub mod astar;
pub mod cache;
pub mod ucs;

/// Options which tune how a search runs.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Log progress every this many frontier pops.
    pub verbose: Option<usize>,

    /// Give up with an error after this many expansions.
    pub step_limit: Option<usize>,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// Implementation of best-first search, using generic components.
///
/// The explored record (E) decides when a state may be expanded
/// again, and the heuristic (H) is added to the path cost to
/// prioritize the frontier. Uniform-cost search and A* are both
/// built from this.
pub struct SearchAlgorithm<'p, P, E, H>
where
    P: Problem,
    E: Explored<State = P::State, Cost = P::Cost>,
    H: Fn(&P::State) -> P::Cost,
{
    problem: &'p P,
    heuristic: H,
    explored: E,
    frontier: PriorityFrontier<P::Cost, Rc<SearchNode<P>>>,
    options: SearchOptions,
    counter: Option<StepLimit>,
    nodes_expanded: usize,
}

impl<'p, P, E, H> SearchAlgorithm<'p, P, E, H>
where
    P: Problem,
    E: Explored<State = P::State, Cost = P::Cost>,
    H: Fn(&P::State) -> P::Cost,
{
    fn new(problem: &'p P, heuristic: H) -> Self {
        SearchAlgorithm {
            problem,
            heuristic,
            explored: E::default(),
            frontier: PriorityFrontier::new(),
            options: SearchOptions::default(),
            counter: None,
            nodes_expanded: 0,
        }
    }

    /// Replace the options for this search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.counter = options.step_limit.map(StepLimit::new);
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When more than this many nodes have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.step_limit = Some(limit);
        self.counter = Some(StepLimit::new(limit));
    }

    fn estimate(&self, state: &P::State) -> Result<P::Cost> {
        let h = (self.heuristic)(state);
        match h.partial_cmp(&P::Cost::zero()) {
            Some(Ordering::Greater) | Some(Ordering::Equal) => Ok(h),
            _ => Err(SearchError::MalformedProblem(format!(
                "heuristic {:?} for state {:?} is not a non-negative cost",
                h, state
            ))),
        }
    }

    // Push every admissible child of this node onto the frontier.
    fn expand(&mut self, node: &Rc<SearchNode<P>>) -> Result<()> {
        for action in self.problem.actions(node.state()) {
            let state = self.problem.result(node.state(), &action).ok_or_else(|| {
                SearchError::MalformedProblem(format!(
                    "action {:?} can not be applied to state {:?}",
                    action,
                    node.state()
                ))
            })?;

            let cost = self
                .problem
                .path_cost(node.path_cost(), node.state(), &action, &state);
            match cost.partial_cmp(&node.path_cost()) {
                Some(Ordering::Greater) | Some(Ordering::Equal) => {}
                _ => {
                    return Err(SearchError::MalformedProblem(format!(
                        "action {:?} changes path cost from {:?} to {:?}",
                        action,
                        node.path_cost(),
                        cost
                    )))
                }
            }

            if !self.explored.admits(&state, cost) {
                continue;
            }

            let priority = cost + self.estimate(&state)?;
            let child = SearchNode::child(node, action, state, cost);
            self.frontier.push(priority, Rc::new(child));
        }
        Ok(())
    }

    fn report(&self, goal: Option<&SearchNode<P>>, start: time::Instant) -> SearchReport<P> {
        let elapsed = start.elapsed();

        match goal {
            Some(node) => info!(
                "Solved with cost {:?} in {} steps: expanded {} nodes in {:?}",
                node.path_cost(),
                node.depth(),
                self.nodes_expanded,
                elapsed
            ),
            None => info!(
                "Frontier exhausted without a solution: expanded {} nodes in {:?}",
                self.nodes_expanded, elapsed
            ),
        }

        SearchReport {
            solution: goal.map(|node| Solution {
                state: node.state().clone(),
                actions: node.solution(),
                path_cost: node.path_cost(),
            }),
            nodes_expanded: self.nodes_expanded,
            states_explored: self.explored.len(),
            frontier_high_water: self.frontier.high_water(),
            elapsed,
        }
    }

    /// Run the search to completion.
    ///
    /// Running out of candidates is not an error: the report
    /// simply carries no solution.
    pub fn run(mut self) -> Result<SearchReport<P>> {
        let start = time::Instant::now();

        let root = SearchNode::root(self.problem.initial_state());
        let priority = root.path_cost() + self.estimate(root.state())?;
        self.frontier.push(priority, Rc::new(root));

        let mut n = 0;
        while !self.frontier.is_empty() {
            let (priority, node) = self.frontier.pop_min()?;
            n += 1;

            // Lazy deletion: stale entries are only discarded once they surface.
            let will_process = self.explored.finalize(node.state_key(), node.path_cost());

            match self.options.verbose {
                Some(interval) if interval > 0 && n % interval == 0 => debug!(
                    "Q{} E{} P{:?} N{:?} ({}) X{} {}",
                    self.frontier.len(),
                    self.explored.len(),
                    priority,
                    self.frontier.peek_priority(),
                    if will_process { "y" } else { "n" },
                    self.nodes_expanded,
                    n
                ),
                _ => {}
            }

            if !will_process {
                continue;
            }

            if self.problem.goal_test(node.state()) {
                return Ok(self.report(Some(&*node), start));
            }

            self.nodes_expanded += 1;
            if let Some(counter) = self.counter.as_mut() {
                counter.increment()?;
            }

            self.expand(&node)?;
        }

        Ok(self.report(None, start))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{astar, ucs};

    /// Counts up from zero, with a few ways to misbehave.
    #[derive(Debug, Default)]
    struct Counter {
        target: u32,
        broken_result: bool,
        negative_heuristic: bool,
        shrinking_cost: bool,
    }

    impl Problem for Counter {
        type State = u32;
        type Action = u32;
        type Cost = i64;

        fn initial_state(&self) -> u32 {
            0
        }

        fn actions(&self, state: &u32) -> Vec<u32> {
            if *state >= self.target {
                Vec::new()
            } else {
                vec![1, 2]
            }
        }

        fn result(&self, state: &u32, action: &u32) -> Option<u32> {
            if self.broken_result && *action == 2 {
                None
            } else {
                Some(state + action)
            }
        }

        fn goal_test(&self, state: &u32) -> bool {
            *state == self.target
        }

        fn step_cost(&self, _from: &u32, action: &u32, _to: &u32) -> i64 {
            if self.shrinking_cost {
                -1
            } else {
                i64::from(*action)
            }
        }

        fn heuristic(&self, state: &u32) -> i64 {
            if self.negative_heuristic && *state > 0 {
                -1
            } else {
                0
            }
        }
    }

    #[test]
    fn unappliable_action_is_malformed() {
        let problem = Counter {
            target: 4,
            broken_result: true,
            ..Counter::default()
        };
        assert!(matches!(
            ucs(&problem),
            Err(SearchError::MalformedProblem(_))
        ));
    }

    #[test]
    fn negative_heuristic_is_malformed() {
        let problem = Counter {
            target: 4,
            negative_heuristic: true,
            ..Counter::default()
        };
        assert!(matches!(
            astar(&problem),
            Err(SearchError::MalformedProblem(_))
        ));
    }

    #[test]
    fn negative_step_cost_is_malformed() {
        let problem = Counter {
            target: 4,
            shrinking_cost: true,
            ..Counter::default()
        };
        assert!(matches!(
            ucs(&problem),
            Err(SearchError::MalformedProblem(_))
        ));
    }

    /// A single step from 0 to 1, with a configurable step cost.
    #[derive(Debug)]
    struct Step(f64);

    impl Problem for Step {
        type State = u8;
        type Action = ();
        type Cost = f64;

        fn initial_state(&self) -> u8 {
            0
        }

        fn actions(&self, state: &u8) -> Vec<()> {
            if *state == 0 {
                vec![()]
            } else {
                Vec::new()
            }
        }

        fn result(&self, state: &u8, _action: &()) -> Option<u8> {
            Some(state + 1)
        }

        fn goal_test(&self, state: &u8) -> bool {
            *state == 1
        }

        fn step_cost(&self, _from: &u8, _action: &(), _to: &u8) -> f64 {
            self.0
        }
    }

    #[test]
    fn nan_heuristic_is_malformed() {
        let problem = Step(1.0);
        let report = crate::astar_with(&problem, |_| 0.0).unwrap();
        assert_eq!(report.path_cost(), Some(1.0));

        assert!(matches!(
            crate::astar_with(&problem, |_| f64::NAN),
            Err(SearchError::MalformedProblem(_))
        ));
    }

    #[test]
    fn nan_step_cost_is_malformed() {
        let problem = Step(f64::NAN);
        assert!(matches!(
            ucs(&problem),
            Err(SearchError::MalformedProblem(_))
        ));
        assert!(matches!(
            astar(&problem),
            Err(SearchError::MalformedProblem(_))
        ));
    }

    #[test]
    fn step_limit_stops_the_search() {
        let problem = Counter {
            target: 40,
            ..Counter::default()
        };
        let options = {
            let mut o = SearchOptions::default();
            o.step_limit = Some(3);
            o
        };

        let result = crate::ucs::build(&problem).with_options(options).run();
        assert!(matches!(result, Err(SearchError::StepLimitExhausted(3))));
    }

    #[test]
    fn step_limit_is_inclusive() {
        let problem = Counter {
            target: 1,
            ..Counter::default()
        };
        let mut search = crate::ucs::build(&problem);
        search.set_limit(1);

        let report = search.run().unwrap();
        assert_eq!(report.nodes_expanded, 1);
        assert_eq!(report.path_cost(), Some(1));
    }

    #[test]
    fn verbose_progress_does_not_change_the_result() {
        let problem = Counter {
            target: 9,
            ..Counter::default()
        };
        let options = {
            let mut o = SearchOptions::default();
            o.verbose = Some(1);
            o
        };

        let quiet = ucs(&problem).unwrap();
        let loud = crate::ucs::build(&problem)
            .with_options(options)
            .run()
            .unwrap();

        assert_eq!(quiet.path_cost(), Some(9));
        assert_eq!(loud.path_cost(), quiet.path_cost());
        assert_eq!(loud.nodes_expanded, quiet.nodes_expanded);
    }

    #[test]
    fn root_goal_has_no_actions() {
        let problem = Counter::default();
        let report = ucs(&problem).unwrap();

        assert_eq!(report.solution_state(), Some(&0));
        assert_eq!(report.solution_actions(), Some(&[][..]));
        assert_eq!(report.path_cost(), Some(0));
        assert_eq!(report.nodes_expanded, 0);
    }
}
