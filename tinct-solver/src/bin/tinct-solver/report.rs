use std::fmt::Write;

use tinct_solver::results::SatisfactionResult;
use tinct_solver::results::Solution;

pub(crate) const FAILURE: &str = "failure";
pub(crate) const UNKNOWN: &str = "unknown";

/// Formats the single output line for `result`.
pub(crate) fn format_result(result: &SatisfactionResult) -> String {
    match result {
        SatisfactionResult::Satisfiable(solution) => format_solution(solution),
        SatisfactionResult::Unsatisfiable(_) => FAILURE.to_owned(),
        SatisfactionResult::Unknown => UNKNOWN.to_owned(),
    }
}

/// `SOLUTION: {1: 1, 2: 2}`, with the vertices in ascending order.
pub(crate) fn format_solution(solution: &Solution) -> String {
    let mut line = String::from("SOLUTION: {");
    for (index, (vertex, colour)) in solution.iter().enumerate() {
        if index > 0 {
            line.push_str(", ");
        }
        let _ = write!(line, "{vertex}: {colour}");
    }
    line.push('}');
    line
}
