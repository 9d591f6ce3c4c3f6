//! @ai:module:intent Argument contract of the onlineAssignment solver
//! @ai:module:layer domain
//! @ai:module:public_api SolverMode, Invocation
//! @ai:module:stateless true

use crate::results::{weight_label, FileMetadata};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Solver mode passed as the fifth positional argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverMode {
    #[serde(rename = "trainREINFORCE")]
    TrainReinforce,
    #[serde(rename = "testREINFORCE")]
    TestReinforce,
    #[serde(rename = "nearestWarehouse")]
    NearestWarehouse,
}

impl SolverMode {
    /// @ai:intent Command-line spelling of the mode
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverMode::TrainReinforce => "trainREINFORCE",
            SolverMode::TestReinforce => "testREINFORCE",
            SolverMode::NearestWarehouse => "nearestWarehouse",
        }
    }

    pub fn uses_weights(&self) -> bool {
        !matches!(self, SolverMode::NearestWarehouse)
    }
}

impl std::fmt::Display for SolverMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Temporal and spatial discount weights for the REINFORCE modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub temporal: f64,
    pub spatial: f64,
}

/// @ai:intent One planned call of the solver binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub instance: PathBuf,
    pub fleet_size: u32,
    pub penalty: u32,
    pub inter_arrival_time: u32,
    pub mode: SolverMode,
    /// Present for the REINFORCE modes, absent for nearestWarehouse
    pub weights: Option<Weights>,
}

impl Invocation {
    /// @ai:intent Positional arguments in the order the solver reads them
    /// @ai:post weights are appended only when the mode uses them
    /// @ai:effects pure
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.instance.to_string_lossy().into_owned(),
            self.fleet_size.to_string(),
            self.penalty.to_string(),
            self.inter_arrival_time.to_string(),
            self.mode.as_str().to_string(),
        ];

        if let Some(weights) = self.weights.filter(|_| self.mode.uses_weights()) {
            args.push(weights.temporal.to_string());
            args.push(weights.spatial.to_string());
        }

        args
    }

    /// @ai:intent Human-readable command line for logs and plans
    /// @ai:effects pure
    pub fn command_line(&self, binary: &std::path::Path) -> String {
        let mut parts = vec![binary.display().to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }

    /// @ai:intent Name of the stats file the solver writes for a test run
    /// @ai:post None for modes whose output is not collected
    /// @ai:effects pure
    pub fn solver_stats_file(&self) -> Option<String> {
        match (self.mode, self.weights) {
            (SolverMode::TestReinforce, Some(w)) => Some(format!(
                "statsData_{}_{}_{:.6}_{:.6}.txt",
                self.penalty, self.inter_arrival_time, w.temporal as f32, w.spatial as f32
            )),
            _ => None,
        }
    }

    /// @ai:intent Metadata under which a test run's stats file is collected
    /// @ai:effects pure
    pub fn result_metadata(&self) -> Option<FileMetadata> {
        let weights = self.weights?;

        Some(FileMetadata {
            penalty: self.penalty,
            arrival_rate: self.inter_arrival_time,
            t_lam: weight_label(weights.temporal),
            s_lam: weight_label(weights.spatial),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(mode: SolverMode, weights: Option<Weights>) -> Invocation {
        Invocation {
            instance: PathBuf::from("instances/instance_test.txt"),
            fleet_size: 8,
            penalty: 1800,
            inter_arrival_time: 25,
            mode,
            weights,
        }
    }

    fn weights(temporal: f64, spatial: f64) -> Option<Weights> {
        Some(Weights { temporal, spatial })
    }

    #[test]
    fn test_args_with_weights() {
        let inv = invocation(SolverMode::TrainReinforce, weights(0.99, 0.0));

        assert_eq!(
            inv.args(),
            vec![
                "instances/instance_test.txt",
                "8",
                "1800",
                "25",
                "trainREINFORCE",
                "0.99",
                "0"
            ]
        );
    }

    #[test]
    fn test_args_nearest_warehouse_omits_weights() {
        let inv = invocation(SolverMode::NearestWarehouse, weights(0.99, 0.5));

        assert_eq!(inv.args().len(), 5);
        assert_eq!(inv.args()[4], "nearestWarehouse");
    }

    #[test]
    fn test_command_line() {
        let inv = invocation(SolverMode::TestReinforce, weights(0.99, 0.5));

        assert_eq!(
            inv.command_line(std::path::Path::new("./onlineAssignment")),
            "./onlineAssignment instances/instance_test.txt 8 1800 25 testREINFORCE 0.99 0.5"
        );
    }

    #[test]
    fn test_solver_stats_file() {
        let inv = invocation(SolverMode::TestReinforce, weights(0.99, 0.5));
        assert_eq!(
            inv.solver_stats_file().unwrap(),
            "statsData_1800_25_0.990000_0.500000.txt"
        );

        let train = invocation(SolverMode::TrainReinforce, weights(0.99, 0.5));
        assert!(train.solver_stats_file().is_none());
    }

    #[test]
    fn test_result_metadata_labels() {
        let inv = invocation(SolverMode::TestReinforce, weights(0.99, 0.0));
        let meta = inv.result_metadata().unwrap();

        assert_eq!(meta.t_lam, "0.99");
        assert_eq!(meta.s_lam, "0.00");
        assert_eq!(meta.arrival_rate, 25);
    }
}
