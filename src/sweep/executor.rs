//! @ai:module:intent Run the solver binary over an invocation plan
//! @ai:module:layer application
//! @ai:module:public_api SweepExecutor, SolverRunnerTrait, ProcessRunner, MockSolverRunner, RunOutcome, SweepSummary
//! @ai:module:stateless false

use crate::config::SweepConfig;
use crate::results::canonical_file_name;
use crate::sweep::invocation::Invocation;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// @ai:intent Exit information of one solver process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunExit {
    pub success: bool,
    pub code: Option<i32>,
}

/// @ai:intent Trait for launching the solver
#[allow(async_fn_in_trait)]
pub trait SolverRunnerTrait: Send + Sync {
    /// @ai:intent Run the binary with the invocation's arguments and wait for it
    async fn run(&self, binary: &Path, invocation: &Invocation) -> Result<RunExit>;
}

/// @ai:intent Runs the solver as a child process with inherited stdio
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverRunnerTrait for ProcessRunner {
    /// @ai:effects process
    async fn run(&self, binary: &Path, invocation: &Invocation) -> Result<RunExit> {
        let status = tokio::process::Command::new(binary)
            .args(invocation.args())
            .status()
            .await
            .with_context(|| format!("Failed to start solver {}", binary.display()))?;

        Ok(RunExit {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// @ai:intent Test runner that records calls and optionally writes stats files
pub struct MockSolverRunner {
    exit_code: i32,
    stats_dir: Option<PathBuf>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockSolverRunner {
    /// @ai:intent Create a mock that exits with the given code
    pub fn new(exit_code: i32) -> Self {
        Self {
            exit_code,
            stats_dir: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// @ai:intent Make test runs write a small stats file into a directory
    pub fn writing_stats_to(mut self, dir: PathBuf) -> Self {
        self.stats_dir = Some(dir);
        self
    }

    /// @ai:intent Argument vectors seen so far
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl SolverRunnerTrait for MockSolverRunner {
    async fn run(&self, _binary: &Path, invocation: &Invocation) -> Result<RunExit> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(invocation.args());
        }

        if let (Some(dir), Some(name)) = (&self.stats_dir, invocation.solver_stats_file()) {
            std::fs::create_dir_all(dir)?;
            std::fs::write(
                dir.join(name),
                "TotalCosts RejectionRate MeanWaitingTime MaxWaitingTime \n100 0.1 5 9\n",
            )?;
        }

        Ok(RunExit {
            success: self.exit_code == 0,
            code: Some(self.exit_code),
        })
    }
}

/// @ai:intent What happened to one planned invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Succeeded,
    Failed,
    Skipped,
}

/// @ai:intent Outcome of one planned invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    pub invocation: Invocation,
    pub status: RunStatus,
    pub exit_code: Option<i32>,
    pub elapsed_ms: u64,
    /// Collected stats file, when collection is enabled and succeeded
    pub collected: Option<PathBuf>,
}

/// @ai:intent Outcomes of a whole sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    pub started_at: String,
    pub finished_at: String,
    pub outcomes: Vec<RunOutcome>,
}

impl SweepSummary {
    pub fn count(&self, status: RunStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn total_elapsed_ms(&self) -> u64 {
        self.outcomes.iter().map(|o| o.elapsed_ms).sum()
    }

    /// @ai:intent Write the summary as pretty JSON
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write sweep summary {}", path.display()))?;
        Ok(())
    }
}

/// @ai:intent Executes an invocation plan one run at a time
pub struct SweepExecutor<R: SolverRunnerTrait> {
    runner: Arc<R>,
    config: SweepConfig,
}

impl<R: SolverRunnerTrait> SweepExecutor<R> {
    /// @ai:intent Create a new sweep executor
    /// @ai:effects pure
    pub fn new(runner: Arc<R>, config: SweepConfig) -> Self {
        Self { runner, config }
    }

    /// @ai:intent Copy a test run's stats file into the collection directory
    /// @ai:effects fs:read, fs:write
    fn collect(&self, invocation: &Invocation, collect_dir: &Path) -> Result<Option<PathBuf>> {
        let (Some(source_name), Some(meta)) =
            (invocation.solver_stats_file(), invocation.result_metadata())
        else {
            return Ok(None);
        };

        let source = self.config.solver.output_dir.join(source_name);
        let target = collect_dir.join(canonical_file_name(&meta)?);

        std::fs::create_dir_all(collect_dir)?;
        std::fs::copy(&source, &target).with_context(|| {
            format!("Failed to collect {} into {}", source.display(), target.display())
        })?;

        tracing::debug!("Collected {} as {}", source.display(), target.display());
        Ok(Some(target))
    }

    /// @ai:intent Execute a single invocation
    /// @ai:effects process, fs:write
    async fn execute_once(&self, invocation: &Invocation) -> Result<RunOutcome> {
        let binary = &self.config.solver.binary;

        if self.config.run.dry_run {
            tracing::info!("[dry run] {}", invocation.command_line(binary));
            return Ok(RunOutcome {
                invocation: invocation.clone(),
                status: RunStatus::Skipped,
                exit_code: None,
                elapsed_ms: 0,
                collected: None,
            });
        }

        let start = std::time::Instant::now();
        let exit = self.runner.run(binary, invocation).await?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if !exit.success {
            let message = format!(
                "Solver exited with {:?}: {}",
                exit.code,
                invocation.command_line(binary)
            );

            if self.config.run.fail_fast {
                anyhow::bail!(message);
            }
            tracing::warn!("{}", message);

            return Ok(RunOutcome {
                invocation: invocation.clone(),
                status: RunStatus::Failed,
                exit_code: exit.code,
                elapsed_ms,
                collected: None,
            });
        }

        let collected = match &self.config.paths.collect_dir {
            Some(dir) => match self.collect(invocation, dir) {
                Ok(collected) => collected,
                Err(e) if !self.config.run.fail_fast => {
                    tracing::warn!("{:#}", e);
                    None
                }
                Err(e) => return Err(e),
            },
            None => None,
        };

        Ok(RunOutcome {
            invocation: invocation.clone(),
            status: RunStatus::Succeeded,
            exit_code: exit.code,
            elapsed_ms,
            collected,
        })
    }

    /// @ai:intent Execute all invocations in order
    /// @ai:effects process, fs:write
    pub async fn execute_all(&self, invocations: &[Invocation]) -> Result<SweepSummary> {
        let started_at = chrono::Utc::now().to_rfc3339();
        let total = invocations.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, invocation) in invocations.iter().enumerate() {
            tracing::info!(
                "[{}/{}] Running {} (penalty={}, inter_arrival={})",
                i + 1,
                total,
                invocation.mode,
                invocation.penalty,
                invocation.inter_arrival_time
            );

            outcomes.push(self.execute_once(invocation).await?);
        }

        Ok(SweepSummary {
            started_at,
            finished_at: chrono::Utc::now().to_rfc3339(),
            outcomes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::parse_file_name;
    use crate::sweep::grid::plan;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_dry_run_skips_everything() {
        let runner = Arc::new(MockSolverRunner::new(0));
        let mut config = SweepConfig::default();
        config.run.dry_run = true;

        let invocations = plan(&config);
        let executor = SweepExecutor::new(runner.clone(), config);
        let summary = executor.execute_all(&invocations).await.unwrap();

        assert_eq!(summary.count(RunStatus::Skipped), 4);
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_runs_in_plan_order() {
        let runner = Arc::new(MockSolverRunner::new(0));
        let config = SweepConfig::default();

        let invocations = plan(&config);
        let executor = SweepExecutor::new(runner.clone(), config);
        let summary = executor.execute_all(&invocations).await.unwrap();

        assert_eq!(summary.count(RunStatus::Succeeded), 4);

        let modes: Vec<_> = runner.calls().iter().map(|c| c[4].clone()).collect();
        assert_eq!(
            modes,
            vec!["trainREINFORCE", "testREINFORCE", "trainREINFORCE", "testREINFORCE"]
        );
    }

    #[tokio::test]
    async fn test_failure_continues_without_fail_fast() {
        let runner = Arc::new(MockSolverRunner::new(3));
        let config = SweepConfig::default();

        let invocations = plan(&config);
        let executor = SweepExecutor::new(runner.clone(), config);
        let summary = executor.execute_all(&invocations).await.unwrap();

        assert_eq!(summary.count(RunStatus::Failed), 4);
        assert_eq!(summary.outcomes[0].exit_code, Some(3));
    }

    #[tokio::test]
    async fn test_failure_aborts_with_fail_fast() {
        let runner = Arc::new(MockSolverRunner::new(1));
        let mut config = SweepConfig::default();
        config.run.fail_fast = true;

        let invocations = plan(&config);
        let executor = SweepExecutor::new(runner.clone(), config);

        assert!(executor.execute_all(&invocations).await.is_err());
        assert_eq!(runner.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_collects_test_stats_under_fixed_offset_names() {
        let temp = TempDir::new().unwrap();
        let solver_out = temp.path().join("testData");
        let collect_dir = temp.path().join("collected");

        let runner = Arc::new(MockSolverRunner::new(0).writing_stats_to(solver_out.clone()));
        let mut config = SweepConfig::default();
        config.solver.output_dir = solver_out;
        config.paths.collect_dir = Some(collect_dir.clone());

        let invocations = plan(&config);
        let executor = SweepExecutor::new(runner, config);
        let summary = executor.execute_all(&invocations).await.unwrap();

        let collected: Vec<_> = summary
            .outcomes
            .iter()
            .filter_map(|o| o.collected.as_ref())
            .collect();
        assert_eq!(collected.len(), 2);

        let name = collected[1].file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(name, "statsData_1800_25_lambdaT0.99_lamS0.50.txt");

        let meta = parse_file_name(&name).unwrap();
        assert_eq!(meta.s_lam, "0.50");
        assert!(collect_dir.join(&name).exists());
    }

    #[tokio::test]
    async fn test_missing_stats_file_is_a_warning() {
        let temp = TempDir::new().unwrap();
        let runner = Arc::new(MockSolverRunner::new(0));
        let mut config = SweepConfig::default();
        config.solver.output_dir = temp.path().join("nowhere");
        config.paths.collect_dir = Some(temp.path().join("collected"));

        let invocations = plan(&config);
        let executor = SweepExecutor::new(runner, config);
        let summary = executor.execute_all(&invocations).await.unwrap();

        assert_eq!(summary.count(RunStatus::Succeeded), 4);
        assert!(summary.outcomes.iter().all(|o| o.collected.is_none()));
    }

    #[test]
    fn test_summary_save() {
        let temp = TempDir::new().unwrap();
        let summary = SweepSummary {
            started_at: "2026-10-18T00:00:00+00:00".to_string(),
            finished_at: "2026-10-18T01:00:00+00:00".to_string(),
            outcomes: vec![],
        };

        let path = temp.path().join("sweep.json");
        summary.save(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("started_at"));
    }
}
