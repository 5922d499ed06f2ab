use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use crate::{error::OptimizerResult, solver::solver_matrix::SolverMatrix, tsplib::spec_writer::SpecWriter};

/// Symmetric TSP with an explicit, full integer weight matrix.
///
/// This is the only TSPLIB flavour the solvers here consume:
///
/// ```text
/// NAME: temp
/// TYPE: TSP
/// DIMENSION: 3
/// EDGE_WEIGHT_TYPE: EXPLICIT
/// EDGE_WEIGHT_FORMAT: FULL_MATRIX
/// EDGE_WEIGHT_SECTION
/// 0 7 3
/// 7 0 5
/// 3 5 0
/// EOF
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TsplibProblem {
    pub name: String,
    pub comment_lines: Vec<String>,
    pub edge_weight_section: Vec<Vec<i64>>,
}

impl TsplibProblem {
    pub fn new(name: impl Into<String>, edge_weight_section: Vec<Vec<i64>>) -> Self {
        Self {
            name: name.into(),
            comment_lines: Vec::new(),
            edge_weight_section,
        }
    }

    pub fn from_matrix(name: impl Into<String>, matrix: &SolverMatrix) -> Self {
        Self::new(name, matrix.rows().map(<[i64]>::to_vec).collect())
    }

    pub fn dimension(&self) -> usize {
        self.edge_weight_section.len()
    }

    pub fn write_to_file(&self, path: &Path) -> OptimizerResult<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl Display for TsplibProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut writer = SpecWriter::new(f);

        writer.kv_colon("NAME", &self.name)?;
        writer.kv_colon("TYPE", "TSP")?;

        for comment in &self.comment_lines {
            writer.kv_colon("COMMENT", comment)?;
        }

        writer.kv_colon("DIMENSION", self.dimension())?;
        writer.kv_colon("EDGE_WEIGHT_TYPE", "EXPLICIT")?;
        writer.kv_colon("EDGE_WEIGHT_FORMAT", "FULL_MATRIX")?;
        writer.line("EDGE_WEIGHT_SECTION")?;
        for row in &self.edge_weight_section {
            writer.row(row)?;
        }

        writer.line("EOF")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_emits_explicit_full_matrix() {
        let problem = TsplibProblem::new(
            "temp",
            vec![vec![0, 7, 3], vec![7, 0, 5], vec![3, 5, 0]],
        );

        assert_eq!(
            problem.to_string(),
            "NAME: temp\n\
             TYPE: TSP\n\
             DIMENSION: 3\n\
             EDGE_WEIGHT_TYPE: EXPLICIT\n\
             EDGE_WEIGHT_FORMAT: FULL_MATRIX\n\
             EDGE_WEIGHT_SECTION\n\
             0 7 3\n\
             7 0 5\n\
             3 5 0\n\
             EOF\n"
        );
    }

    #[test]
    fn test_comments_stay_in_the_header() {
        let mut problem = TsplibProblem::new("sample", vec![vec![0, 1], vec![1, 0]]);
        problem.comment_lines.push("dispatch D-1".to_string());

        let text = problem.to_string();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "NAME: sample");
        assert_eq!(lines[1], "TYPE: TSP");
        assert_eq!(lines[2], "COMMENT: dispatch D-1");
        assert_eq!(lines[3], "DIMENSION: 2");
    }

    #[test]
    fn test_from_matrix_truncates_distances() {
        let matrix = SolverMatrix::from_distances(
            vec!["start".into(), "A".into()],
            &[vec![0.0, 12.9], vec![12.9, 0.0]],
        )
        .unwrap();

        let problem = TsplibProblem::from_matrix("temp", &matrix);

        assert_eq!(problem.edge_weight_section, vec![vec![0, 12], vec![12, 0]]);
    }
}
