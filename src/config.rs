//! @ai:module:intent Configuration structs for parameter sweeps
//! @ai:module:layer infrastructure
//! @ai:module:public_api SweepConfig, SolverConfig, GridConfig, PathConfig, RunConfig
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Main configuration for a sweep over the solver
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// @ai:intent Location of the solver binary and its fixed arguments
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    #[serde(default = "default_fleet_size")]
    pub fleet_size: u32,
    /// Directory the solver writes its test statistics into
    #[serde(default = "default_solver_output_dir")]
    pub output_dir: PathBuf,
}

/// @ai:intent Parameter values to sweep over
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_temporal_weights")]
    pub temporal_weights: Vec<f64>,
    #[serde(default = "default_spatial_weights")]
    pub spatial_weights: Vec<f64>,
    #[serde(default = "default_penalties")]
    pub penalties: Vec<u32>,
    #[serde(default = "default_inter_arrival_times")]
    pub inter_arrival_times: Vec<u32>,
    #[serde(default)]
    pub include_nearest_warehouse: bool,
}

/// @ai:intent Instance inputs and result collection directory
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_train_instance")]
    pub train_instance: PathBuf,
    #[serde(default = "default_test_instance")]
    pub test_instance: PathBuf,
    /// When set, test statistics are copied here under fixed-offset names
    #[serde(default)]
    pub collect_dir: Option<PathBuf>,
}

/// @ai:intent Execution switches
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            fleet_size: default_fleet_size(),
            output_dir: default_solver_output_dir(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            temporal_weights: default_temporal_weights(),
            spatial_weights: default_spatial_weights(),
            penalties: default_penalties(),
            inter_arrival_times: default_inter_arrival_times(),
            include_nearest_warehouse: false,
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            train_instance: default_train_instance(),
            test_instance: default_test_instance(),
            collect_dir: None,
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("./onlineAssignment")
}

fn default_fleet_size() -> u32 {
    8
}

fn default_solver_output_dir() -> PathBuf {
    PathBuf::from("data/experimentData/testData")
}

fn default_temporal_weights() -> Vec<f64> {
    vec![0.99]
}

fn default_spatial_weights() -> Vec<f64> {
    vec![0.0, 0.5]
}

fn default_penalties() -> Vec<u32> {
    vec![1800]
}

fn default_inter_arrival_times() -> Vec<u32> {
    vec![25]
}

fn default_train_instance() -> PathBuf {
    PathBuf::from("instances/instance_train.txt")
}

fn default_test_instance() -> PathBuf {
    PathBuf::from("instances/instance_test.txt")
}

impl SweepConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Reject grids that would produce unusable runs
    /// @ai:effects pure
    pub fn validate(&self) -> anyhow::Result<()> {
        let weights = self
            .grid
            .temporal_weights
            .iter()
            .chain(&self.grid.spatial_weights);

        for weight in weights {
            if !(0.0..=1.0).contains(weight) {
                anyhow::bail!("Weight {} is outside [0, 1]", weight);
            }
        }

        if self.solver.fleet_size == 0 {
            anyhow::bail!("fleet_size must be at least 1");
        }

        if self.grid.inter_arrival_times.contains(&0) {
            anyhow::bail!("inter_arrival_times must be positive");
        }

        Ok(())
    }
}
