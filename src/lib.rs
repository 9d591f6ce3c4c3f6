//! @ai:module:intent Sweeps, result tables and maps for the onlineAssignment solver
//! @ai:module:layer application
//! @ai:module:public_api config, error, map, metrics, report, results, sweep

pub mod config;
pub mod error;
pub mod map;
pub mod metrics;
pub mod report;
pub mod results;
pub mod sweep;

pub use config::SweepConfig;
pub use error::{Error, Result};
pub use metrics::{AggregateTable, ExperimentRecord, Scenario, TableAggregator, TableAggregatorTrait};
pub use report::{ReportGenerator, TableFormat, TableReport};
pub use results::{ResultLoader, ResultLoaderTrait};
pub use sweep::{SweepExecutor, SweepSummary};

use std::path::Path;

/// @ai:intent Load every result file under root and aggregate it into a table report
/// @ai:effects fs:read
pub fn build_table_report(root: &Path) -> Result<TableReport> {
    let files = ResultLoader::new().load_all(root)?;
    let record_count = files.iter().map(|f| f.values.len()).sum();
    let table = TableAggregator::new().aggregate_files(&files);

    Ok(TableReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        source: root.to_path_buf(),
        file_count: files.len(),
        record_count,
        table,
    })
}
