//! @ai:module:intent Experiment records, scenarios and table aggregation
//! @ai:module:layer application
//! @ai:module:public_api ExperimentRecord, Scenario, AggregateTable, TableRow, TableAggregator

pub mod aggregator;
pub mod order;
pub mod scenario;
pub mod types;

pub use aggregator::{TableAggregator, TableAggregatorTrait};
pub use scenario::Scenario;
pub use types::{AggregateTable, ExperimentRecord, TableRow};
