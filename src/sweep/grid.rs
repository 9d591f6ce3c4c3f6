//! @ai:module:intent Expand a parameter grid into an ordered invocation plan
//! @ai:module:layer application
//! @ai:module:public_api plan
//! @ai:module:stateless true

use crate::config::SweepConfig;
use crate::sweep::invocation::{Invocation, SolverMode, Weights};

/// @ai:intent Build the invocation plan for a sweep
/// @ai:post per (interArrival, penalty, tWeight, sWeight): train then test; optional
///          nearestWarehouse run after each (interArrival, penalty) block
/// @ai:effects pure
pub fn plan(config: &SweepConfig) -> Vec<Invocation> {
    let grid = &config.grid;
    let paths = &config.paths;
    let fleet_size = config.solver.fleet_size;
    let mut invocations = Vec::new();

    for &inter_arrival_time in &grid.inter_arrival_times {
        for &penalty in &grid.penalties {
            for &temporal in &grid.temporal_weights {
                for &spatial in &grid.spatial_weights {
                    let weights = Some(Weights { temporal, spatial });

                    invocations.push(Invocation {
                        instance: paths.train_instance.clone(),
                        fleet_size,
                        penalty,
                        inter_arrival_time,
                        mode: SolverMode::TrainReinforce,
                        weights,
                    });

                    invocations.push(Invocation {
                        instance: paths.test_instance.clone(),
                        fleet_size,
                        penalty,
                        inter_arrival_time,
                        mode: SolverMode::TestReinforce,
                        weights,
                    });
                }
            }

            if grid.include_nearest_warehouse {
                invocations.push(Invocation {
                    instance: paths.test_instance.clone(),
                    fleet_size,
                    penalty,
                    inter_arrival_time,
                    mode: SolverMode::NearestWarehouse,
                    weights: None,
                });
            }
        }
    }

    invocations
}
