//! @ai:module:intent Parameter sweeps over the onlineAssignment solver
//! @ai:module:layer application
//! @ai:module:public_api plan, Invocation, SolverMode, SweepExecutor, ProcessRunner, SweepSummary

pub mod executor;
pub mod grid;
pub mod invocation;

pub use executor::{
    MockSolverRunner, ProcessRunner, RunExit, RunOutcome, RunStatus, SolverRunnerTrait,
    SweepExecutor, SweepSummary,
};
pub use grid::plan;
pub use invocation::{Invocation, SolverMode, Weights};
