use std::{fs, path::Path};

use crate::error::{OptimizerError, OptimizerResult};

/// Concorde `.sol` file: the dimension followed by a zero-based node order,
/// whitespace separated over any number of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConcordeSolution {
    pub dimension: usize,
    pub tour: Vec<usize>,
}

impl ConcordeSolution {
    pub fn from_file(path: &Path) -> OptimizerResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> OptimizerResult<Self> {
        let mut tokens = text.split_whitespace();

        let dimension = tokens
            .next()
            .ok_or_else(|| OptimizerError::malformed_solver_output("empty solution file"))
            .and_then(parse_token)?;

        let tour = tokens.map(parse_token).collect::<OptimizerResult<Vec<_>>>()?;

        if tour.len() != dimension {
            return Err(OptimizerError::malformed_solver_output(format!(
                "dimension is {dimension}, but the solution lists {} nodes",
                tour.len()
            )));
        }

        Ok(Self { dimension, tour })
    }
}

fn parse_token(token: &str) -> OptimizerResult<usize> {
    token.parse().map_err(|e| {
        OptimizerError::malformed_solver_output(format!("bad solution token '{token}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_concorde_solution() {
        let solution = ConcordeSolution::parse("5\n0 3 1 4 \n2\n").unwrap();

        assert_eq!(solution.dimension, 5);
        assert_eq!(solution.tour, vec![0, 3, 1, 4, 2]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = ConcordeSolution::parse("3\n0 1\n");
        assert!(matches!(
            result,
            Err(OptimizerError::MalformedSolverOutput(_))
        ));
    }

    #[test]
    fn test_bad_tokens() {
        assert!(ConcordeSolution::parse("").is_err());
        assert!(ConcordeSolution::parse("2\n0 -1\n").is_err());
        assert!(ConcordeSolution::parse("two\n0 1\n").is_err());
    }
}
