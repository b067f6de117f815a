use colored::Colorize;
use serde::{Deserialize, Serialize};
use smartbin_core::{EconomyConfig, MemoryStorage};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::session::Session;
use crate::scenario::Scenario;
use crate::storage::{FileStorage, TesterStorage};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    pub final_points: u64,
    pub final_balance: u64,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    verbose: bool,
    state_dir: Option<PathBuf>,
    config: EconomyConfig,
}

impl LogicTester {
    pub const fn new(verbose: bool, state_dir: Option<PathBuf>, config: EconomyConfig) -> Self {
        Self {
            verbose,
            state_dir,
            config,
        }
    }

    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn storage_for(&self, scenario: &Scenario, seed: u64) -> Result<TesterStorage, String> {
        match &self.state_dir {
            None => Ok(TesterStorage::Memory(MemoryStorage::new())),
            Some(dir) => {
                let storage = FileStorage::open(dir.join(format!("{}-seed-{seed}", scenario.key)))
                    .map_err(|err| err.to_string())?;
                log::debug!("file storage at {}", storage.dir().display());
                Ok(TesterStorage::File(storage))
            }
        }
    }

    fn run_single_scenario(
        &self,
        scenario: &Scenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let storage = match self.storage_for(scenario, seed) {
            Ok(storage) => storage,
            Err(err) => {
                return ScenarioResult {
                    scenario_name: scenario.name.to_string(),
                    seed,
                    passed: false,
                    iterations_run: 0,
                    successful_iterations: 0,
                    failures: vec![format!("storage setup failed: {err}")],
                    final_points: 0,
                    final_balance: 0,
                    average_duration: Duration::ZERO,
                };
            }
        };

        let mut session = Session::new(storage, self.config.clone(), seed, self.verbose);
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut timings = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let outcome = (scenario.step)(&mut session, i, iterations).and_then(|()| session.check());
            match outcome {
                Ok(()) => {
                    successes += 1;
                    timings.push(start_time.elapsed());
                }
                Err(err) => {
                    log::warn!("{} seed {seed} action {}: {err:#}", scenario.key, i + 1);
                    if self.verbose {
                        println!(
                            "  ❌ Action {}/{} failed: {}",
                            i + 1,
                            iterations,
                            format!("{err:#}").red()
                        );
                    }
                    failures.push(format!("Action {} (seed {seed}): {err:#}", i + 1));
                    session.resync();
                }
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(u32::MAX)
        };
        let record = session.bin.snapshot();

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            final_points: record.points,
            final_balance: record.balance,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}
