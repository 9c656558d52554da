#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use std::collections::BTreeMap;

use helpers::instance;
use helpers::run_solver;
use helpers::run_solver_with_options;

fn edges(name: &str) -> Vec<(i64, i64)> {
    let contents = std::fs::read_to_string(instance(name)).unwrap();
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.contains('='))
        .map(|line| {
            let (u, v) = line.split_once(',').unwrap();
            (u.trim().parse().unwrap(), v.trim().parse().unwrap())
        })
        .collect()
}

fn assert_proper(name: &str, colour_count: u32) {
    let output = run_solver(instance(name));
    assert_eq!(output.exit_code, Some(0));

    let solution = output
        .solution()
        .unwrap_or_else(|| panic!("expected a solution, got '{}'", output.result_line()));
    let colours = solution.iter().copied().collect::<BTreeMap<_, _>>();

    assert_eq!(
        solution.iter().map(|&(vertex, _)| vertex).collect::<Vec<_>>(),
        colours.keys().copied().collect::<Vec<_>>(),
        "vertices are printed in ascending order"
    );
    assert!(colours.values().all(|&colour| (1..=colour_count).contains(&colour)));
    for (u, v) in edges(name) {
        assert_ne!(colours[&u], colours[&v], "{u} and {v} share a colour");
    }
}

#[test]
fn triangle_with_two_colours_fails() {
    let output = run_solver(instance("triangle_k2.col"));

    assert_eq!(output.exit_code, Some(0));
    assert_eq!(output.result_line(), "failure");
}

#[test]
fn triangle_with_three_colours_is_printed_exactly() {
    let output = run_solver(instance("triangle_k3.col"));

    assert_eq!(output.result_line(), "SOLUTION: {1: 1, 2: 2, 3: 3}");
}

#[test]
fn square_with_two_colours_is_solved() {
    assert_proper("square_k2.col", 2);
}

#[test]
fn petersen_graph_with_three_colours_is_solved() {
    assert_proper("petersen_k3.col", 3);
}

#[test]
fn self_loop_fails() {
    assert_eq!(run_solver(instance("self_loop.col")).result_line(), "failure");
}

#[test]
fn missing_colour_count_fails() {
    assert_eq!(
        run_solver(instance("missing_colours.col")).result_line(),
        "failure"
    );
}

#[test]
fn malformed_vertex_fails_without_an_error_exit() {
    let output = run_solver(instance("malformed_vertex.col"));

    assert_eq!(output.exit_code, Some(0));
    assert_eq!(output.result_line(), "failure");
}

#[test]
fn missing_instance_file_is_an_error() {
    let output = run_solver(instance("does_not_exist.col"));

    assert_eq!(output.exit_code, Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn statistics_follow_the_result() {
    let output = run_solver_with_options(
        instance("square_k2.col"),
        ["--log-statistics".to_owned()],
    );

    assert!(output.result_line().starts_with("SOLUTION: "));
    let statistics = output.stdout.lines().skip(1).collect::<Vec<_>>();
    assert!(statistics.contains(&"c STAT num_variables=4"));
    assert!(statistics.contains(&"c STAT num_constraints=4"));
    assert!(statistics
        .iter()
        .any(|line| line.starts_with("c STAT num_decisions=")));
    assert!(statistics
        .iter()
        .any(|line| line.starts_with("c STAT ac3_num_revisions=")));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let output = run_solver_with_options(
        instance("triangle_k3.col"),
        ["--verbose".to_owned(), "--omit-timestamp".to_owned()],
    );

    assert_eq!(output.stdout.lines().count(), 1);
    assert!(output.stderr.contains("Logging successfully configured"));
}
