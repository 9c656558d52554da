//! Reads instances in the line based colouring format:
//!
//! ```text
//! # comment
//! colors=3
//! 1,2
//! 2,3
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A line `colors=<k>` (the key is case
//! insensitive) sets the number of colours. Every other line is split on commas; if it has exactly
//! two non-empty parts it is the constraint `u != v`, otherwise it is ignored. Vertices only exist
//! through the constraints which mention them.
//!
//! Integers use Rust's syntax, so digit separators such as `1_0` are rejected.

use std::io::BufRead;

use thiserror::Error;
use tinct_solver::variables::Vertex;
use tinct_solver::ColouringProblem;

const COLOUR_COUNT_KEY: &str = "colors=";

#[derive(Error, Debug)]
pub(crate) enum ParseError {
    #[error("failed to read the instance: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: '{value}' is not a valid number of colours")]
    InvalidColourCount { line: usize, value: String },
    #[error("line {line}: '{value}' is not a valid vertex")]
    InvalidVertex { line: usize, value: String },
}

pub(crate) fn parse_instance(source: impl BufRead) -> Result<ColouringProblem, ParseError> {
    let mut problem = ColouringProblem::default();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if is_colour_count_line(line) {
            let value = line.split('=').nth(1).unwrap_or_default().trim();
            let colour_count = value.parse::<i64>().map_err(|_| ParseError::InvalidColourCount {
                line: line_number,
                value: value.to_owned(),
            })?;
            problem.set_colour_count(colour_count);
            continue;
        }

        let parts = line
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();
        let [u, v] = parts.as_slice() else {
            continue;
        };

        let u = parse_vertex(u, line_number)?;
        let v = parse_vertex(v, line_number)?;
        problem.add_constraint(u, v);
    }

    Ok(problem)
}

fn is_colour_count_line(line: &str) -> bool {
    line.get(..COLOUR_COUNT_KEY.len())
        .is_some_and(|key| key.eq_ignore_ascii_case(COLOUR_COUNT_KEY))
}

fn parse_vertex(value: &str, line: usize) -> Result<Vertex, ParseError> {
    value.parse::<Vertex>().map_err(|_| ParseError::InvalidVertex {
        line,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<ColouringProblem, ParseError> {
        parse_instance(source.as_bytes())
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let problem = parse("# a path\n\ncolors=2\n  # indented comment\n1,2\n2,3\n").unwrap();

        assert_eq!(problem.colour_count(), Some(2));
        assert_eq!(problem.constraints().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn colour_key_is_case_insensitive() {
        let problem = parse("COLORS= 4\n").unwrap();

        assert_eq!(problem.colour_count(), Some(4));
    }

    #[test]
    fn missing_colour_line_leaves_the_count_unset() {
        let problem = parse("1,2\n").unwrap();

        assert_eq!(problem.colour_count(), None);
    }

    #[test]
    fn invalid_colour_count_is_an_error() {
        let error = parse("colors=three\n").unwrap_err();

        assert!(matches!(
            error,
            ParseError::InvalidColourCount { line: 1, ref value } if value == "three"
        ));
    }

    #[test]
    fn digit_separators_are_rejected() {
        assert!(matches!(
            parse("colors=1_0\n").unwrap_err(),
            ParseError::InvalidColourCount { line: 1, .. }
        ));
        assert!(matches!(
            parse("colors=3\n1_0,2\n").unwrap_err(),
            ParseError::InvalidVertex { line: 2, .. }
        ));
    }

    #[test]
    fn edges_are_normalised_and_deduplicated() {
        let problem = parse("colors=3\n5, 2\n2,5\n").unwrap();

        assert_eq!(problem.constraints().collect::<Vec<_>>(), vec![(2, 5)]);
        assert_eq!(problem.vertices().collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn lines_without_exactly_two_parts_are_ignored() {
        let problem = parse("colors=3\n1\n1,2,3\n4,,5\n,\n").unwrap();

        assert_eq!(problem.constraints().collect::<Vec<_>>(), vec![(4, 5)]);
    }

    #[test]
    fn non_integer_vertex_is_an_error() {
        let error = parse("colors=3\n1,x\n").unwrap_err();

        assert!(matches!(
            error,
            ParseError::InvalidVertex { line: 2, ref value } if value == "x"
        ));
    }

    #[test]
    fn self_constraint_is_flagged() {
        let problem = parse("colors=3\n1,2\n7,7\n").unwrap();

        assert_eq!(problem.self_constraint(), Some(7));
    }

    #[test]
    fn negative_vertices_are_allowed() {
        let problem = parse("colors=2\n-1,3\n").unwrap();

        assert_eq!(problem.constraints().collect::<Vec<_>>(), vec![(-1, 3)]);
    }
}
