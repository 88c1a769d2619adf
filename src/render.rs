//! Human readable summaries of search reports.

use std::fmt::Write;

use searcher::SearchReport;

use crate::allocation::{Assignment, ResourceAllocation};

/// Describe the outcome of one search strategy.
pub fn describe(
    problem: &ResourceAllocation,
    report: &SearchReport<ResourceAllocation>,
    label: &str,
) -> String {
    let mut out = String::new();

    match &report.solution {
        Some(solution) => {
            let actions: Vec<String> = solution.actions.iter().map(|a| a.to_string()).collect();

            writeln!(out, "{} found a solution:", label).unwrap();
            writeln!(out, "  Nodes expanded: {}", report.nodes_expanded).unwrap();
            writeln!(out, "  Path cost: {}", solution.path_cost).unwrap();
            writeln!(out, "  Time: {:.6}s", report.elapsed_secs()).unwrap();
            writeln!(out, "  Actions: [{}]", actions.join(", ")).unwrap();
            writeln!(out).unwrap();
            out.push_str(&assignment_table(problem, &solution.state));
        }
        None => {
            writeln!(out, "{} did not find a solution.", label).unwrap();
            writeln!(out, "  Nodes expanded: {}", report.nodes_expanded).unwrap();
            writeln!(out, "  Time: {:.6}s", report.elapsed_secs()).unwrap();
        }
    }

    out
}

/// Per-task placement and per-server load for an assignment.
pub fn assignment_table(problem: &ResourceAllocation, state: &Assignment) -> String {
    let mut out = String::new();

    for (task, requirement) in problem.tasks().iter().enumerate() {
        let line = match state.server(task) {
            Some(server) => format!("Server {}", server),
            None => "unassigned".to_string(),
        };
        writeln!(out, "Task {}: {} (requirement: {})", task, line, requirement).unwrap();
    }

    writeln!(out, "\nServer loads:").unwrap();
    let loads = problem.server_loads(state);
    for (server, (capacity, load)) in problem.servers().iter().zip(loads).enumerate() {
        writeln!(out, "Server {}: Load {} / {}", server, load, capacity).unwrap();
    }

    out
}
