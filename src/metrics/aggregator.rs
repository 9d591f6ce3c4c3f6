//! @ai:module:intent Group, average and pivot experiment records
//! @ai:module:layer application
//! @ai:module:public_api TableAggregator, TableAggregatorTrait
//! @ai:module:stateless true

use crate::metrics::order::sort_key;
use crate::metrics::scenario::Scenario;
use crate::metrics::types::{AggregateTable, ExperimentRecord, TableRow};
use crate::results::ResultFile;
use std::collections::{BTreeMap, BTreeSet};

/// @ai:intent Trait for result aggregation
pub trait TableAggregatorTrait: Send + Sync {
    /// @ai:intent Fold records into the pivoted mean table
    fn aggregate(&self, records: &[ExperimentRecord]) -> AggregateTable;
}

/// @ai:intent Aggregates records into mean objective values per (tLam, scenario, sLam)
pub struct TableAggregator;

impl TableAggregator {
    /// @ai:intent Create a new table aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Expand loaded files into records and aggregate them
    /// @ai:effects pure
    pub fn aggregate_files(&self, files: &[ResultFile]) -> AggregateTable {
        let records: Vec<_> = files.iter().flat_map(ExperimentRecord::from_file).collect();
        self.aggregate(&records)
    }
}

impl Default for TableAggregator {
    fn default() -> Self {
        Self::new()
    }
}

type RowKey = ((bool, u32), (bool, u32), String, Scenario);

fn row_key(t_lam: &str, scenario: Scenario) -> RowKey {
    (
        sort_key(t_lam),
        sort_key(scenario.label()),
        t_lam.to_string(),
        scenario,
    )
}

/// @ai:intent Mean of a group, independent of the order values arrived in
/// @ai:effects pure
fn mean(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum::<f64>() / values.len() as f64
}

impl TableAggregatorTrait for TableAggregator {
    /// @ai:intent Group, average, round half to even and pivot sLam into columns
    /// @ai:post one row per distinct (tLam, scenario), one column per distinct sLam
    /// @ai:post columns are in label order; rows follow display order
    /// @ai:effects pure
    fn aggregate(&self, records: &[ExperimentRecord]) -> AggregateTable {
        let mut sorted: Vec<&ExperimentRecord> = records.iter().collect();
        sorted.sort_by_key(|r| (sort_key(&r.t_lam), sort_key(r.scenario.label())));

        let mut groups: BTreeMap<RowKey, BTreeMap<String, Vec<f64>>> = BTreeMap::new();
        let mut columns: BTreeSet<String> = BTreeSet::new();

        for record in sorted {
            columns.insert(record.s_lam.clone());
            groups
                .entry(row_key(&record.t_lam, record.scenario))
                .or_default()
                .entry(record.s_lam.clone())
                .or_default()
                .push(record.obj_value);
        }

        let columns: Vec<String> = columns.into_iter().collect();

        let rows = groups
            .into_iter()
            .map(|((_, _, t_lam, scenario), mut by_column)| {
                let cells = columns
                    .iter()
                    .map(|column| {
                        by_column
                            .get_mut(column)
                            .map(|values| mean(values).round_ties_even() as i64)
                    })
                    .collect();

                TableRow {
                    t_lam,
                    scenario,
                    cells,
                }
            })
            .collect();

        AggregateTable { columns, rows }
    }
}
