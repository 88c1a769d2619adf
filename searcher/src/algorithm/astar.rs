use super::cache::BestCost;
use super::SearchAlgorithm;
use crate::errors::Result;
use crate::report::SearchReport;
use crate::traits::Problem;

/// A* search, ordered by path cost plus the heuristic (H).
pub type AStarSearch<'p, P, H> =
    SearchAlgorithm<'p, P, BestCost<<P as Problem>::State, <P as Problem>::Cost>, H>;

/// Build an A* searcher guided by [Problem::heuristic].
pub fn build<P>(problem: &P) -> AStarSearch<'_, P, impl Fn(&P::State) -> P::Cost + '_>
where
    P: Problem,
{
    SearchAlgorithm::new(problem, move |state: &P::State| problem.heuristic(state))
}

/// Build an A* searcher guided by a separate heuristic function.
pub fn build_with<P, H>(problem: &P, heuristic: H) -> AStarSearch<'_, P, H>
where
    P: Problem,
    H: Fn(&P::State) -> P::Cost,
{
    SearchAlgorithm::new(problem, heuristic)
}

/// Perform an A* search using the problem's own heuristic.
///
/// The heuristic must never overestimate the remaining cost. It
/// is not required to be consistent: when a cheaper path to an
/// already explored state turns up, that state is expanded again.
pub fn astar<P>(problem: &P) -> Result<SearchReport<P>>
where
    P: Problem,
{
    build(problem).run()
}

/// Perform an A* search using the given heuristic.
pub fn astar_with<P, H>(problem: &P, heuristic: H) -> Result<SearchReport<P>>
where
    P: Problem,
    H: Fn(&P::State) -> P::Cost,
{
    build_with(problem, heuristic).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ucs;

    /// A graph with an admissible but inconsistent heuristic.
    ///
    /// ```text
    /// S --1-- A --1-- C --3-- G
    ///  \              |
    ///   1---- B --3---+
    /// ```
    ///
    /// h(A) = 4 is exact, so A looks worse than the expensive
    /// route through B, and C is first explored at cost 4.
    struct Inconsistent;

    const EDGES: &[(char, char, u32)] = &[
        ('S', 'A', 1),
        ('S', 'B', 1),
        ('A', 'C', 1),
        ('B', 'C', 3),
        ('C', 'G', 3),
    ];

    impl Problem for Inconsistent {
        type State = char;
        type Action = char;
        type Cost = u32;

        fn initial_state(&self) -> char {
            'S'
        }

        fn actions(&self, state: &char) -> Vec<char> {
            EDGES
                .iter()
                .filter(|(from, _, _)| from == state)
                .map(|(_, to, _)| *to)
                .collect()
        }

        fn result(&self, _state: &char, action: &char) -> Option<char> {
            Some(*action)
        }

        fn goal_test(&self, state: &char) -> bool {
            *state == 'G'
        }

        fn step_cost(&self, from: &char, _action: &char, to: &char) -> u32 {
            EDGES
                .iter()
                .find(|(f, t, _)| f == from && t == to)
                .map(|(_, _, c)| *c)
                .unwrap_or(u32::MAX)
        }

        fn heuristic(&self, state: &char) -> u32 {
            match state {
                'A' => 4,
                _ => 0,
            }
        }
    }

    #[test]
    fn reexpands_when_a_cheaper_path_appears() {
        let report = astar(&Inconsistent).unwrap();

        assert_eq!(report.path_cost(), Some(5));
        assert_eq!(report.solution_actions().unwrap(), &['A', 'C', 'G']);

        // S, B, C (at cost 4), A, then C again at cost 2.
        assert_eq!(report.nodes_expanded, 5);
        assert_eq!(report.states_explored, 5);
    }

    #[test]
    fn matches_uniform_cost() {
        let a = astar(&Inconsistent).unwrap();
        let u = ucs(&Inconsistent).unwrap();

        assert_eq!(a.path_cost(), u.path_cost());
        assert_eq!(u.nodes_expanded, 4);
    }

    #[test]
    fn explicit_heuristic_overrides_the_problem() {
        let report = astar_with(&Inconsistent, |_| 0).unwrap();

        assert_eq!(report.path_cost(), Some(5));
        assert_eq!(report.nodes_expanded, 4);
    }
}
