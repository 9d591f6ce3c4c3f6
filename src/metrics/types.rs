//! @ai:module:intent Record and table types for experiment results
//! @ai:module:layer domain
//! @ai:module:public_api ExperimentRecord, TableRow, AggregateTable
//! @ai:module:stateless true

use crate::metrics::scenario::Scenario;
use crate::results::ResultFile;
use serde::{Deserialize, Serialize};

/// @ai:intent One objective value with the labels of the file it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub obj_value: f64,
    pub t_lam: String,
    pub s_lam: String,
    pub scenario: Scenario,
}

impl ExperimentRecord {
    /// @ai:intent Expand a parsed result file into one record per value
    /// @ai:effects pure
    pub fn from_file(file: &ResultFile) -> Vec<Self> {
        let meta = &file.metadata;
        let scenario = Scenario::classify(meta.penalty, meta.arrival_rate);

        file.values
            .iter()
            .map(|&obj_value| Self {
                obj_value,
                t_lam: meta.t_lam.clone(),
                s_lam: meta.s_lam.clone(),
                scenario,
            })
            .collect()
    }
}

/// @ai:intent One pivoted row: a (tLam, scenario) pair and a cell per sLam column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub t_lam: String,
    pub scenario: Scenario,
    /// Rounded mean per column; None when the combination has no data
    pub cells: Vec<Option<i64>>,
}

/// @ai:intent Mean objective values pivoted by spatial weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl AggregateTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// @ai:intent Look up the cell for a (tLam, scenario, sLam) combination
    /// @ai:effects pure
    pub fn cell(&self, t_lam: &str, scenario: Scenario, s_lam: &str) -> Option<i64> {
        let column = self.columns.iter().position(|c| c == s_lam)?;

        self.rows
            .iter()
            .find(|r| r.t_lam == t_lam && r.scenario == scenario)
            .and_then(|r| r.cells.get(column).copied().flatten())
    }
}
