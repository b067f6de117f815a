//! Wiring of store, simulator and noise behind the actions a page can take.
use crate::config::EconomyConfig;
use crate::detection::{DetectionResult, DetectionSimulator};
use crate::diagnostics::{CalibrationLine, MaintenanceLine, calibrate, run_diagnostics};
use crate::economy::{DetectionReceipt, UserEconomyStore};
use crate::noise::SensorNoise;
use crate::record::UserRecord;
use crate::rewards::{PurchaseOutcome, RewardCatalog, RewardError};
use crate::storage::KeyValueStorage;
use crate::waste::{CategoryError, WasteCategory};
use chrono::{DateTime, Utc};

/// Everything the throw page needs to render after a detection.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowOutcome {
    pub claimed: WasteCategory,
    pub result: DetectionResult,
    pub receipt: DetectionReceipt,
}

impl ThrowOutcome {
    #[must_use]
    pub const fn points_awarded(&self) -> u64 {
        self.receipt.points_awarded
    }

    /// Result lines as shown under the detect button.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Detected chemical: {}", self.result.detected),
            format!("Confidence: {}%", self.result.confidence_pct()),
        ];
        if self.result.was_correct {
            lines.push(format!(
                "Correct disposal! You earned {} points.",
                self.receipt.points_awarded
            ));
        } else {
            lines.push("Detection uncertain or mismatch. No points awarded.".to_string());
        }
        lines
    }
}

/// One user's bin: the economy store plus the random source feeding the
/// simulated sensors.
pub struct SmartBin<S: KeyValueStorage, N: SensorNoise> {
    store: UserEconomyStore<S>,
    simulator: DetectionSimulator,
    catalog: RewardCatalog,
    noise: N,
}

impl<S: KeyValueStorage, N: SensorNoise> SmartBin<S, N> {
    pub fn new(storage: S, config: EconomyConfig, noise: N) -> Self {
        let simulator = DetectionSimulator::from_config(&config);
        Self {
            store: UserEconomyStore::new(storage, config),
            simulator,
            catalog: RewardCatalog::builtin().clone(),
            noise,
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: RewardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub const fn store(&self) -> &UserEconomyStore<S> {
        &self.store
    }

    pub const fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    pub fn noise_mut(&mut self) -> &mut N {
        &mut self.noise
    }

    pub fn snapshot(&self) -> UserRecord {
        self.store.load()
    }

    /// Detect an item thrown into the `selection` slot and credit the reward.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing or an unknown category was selected; no
    /// state changes in that case.
    pub fn throw(
        &mut self,
        selection: &str,
        at: DateTime<Utc>,
    ) -> Result<ThrowOutcome, CategoryError> {
        let claimed: WasteCategory = selection.parse()?;
        let result = self.simulator.detect(claimed, &mut self.noise);
        let receipt = self.store.credit_detection(claimed, &result, at);
        log::debug!(
            "detected {} at {:.2} for {claimed}: correct={}",
            result.detected,
            result.confidence,
            result.was_correct
        );
        Ok(ThrowOutcome {
            claimed,
            result,
            receipt,
        })
    }

    /// Buy a catalog item by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the catalog.
    pub fn buy(&self, item_id: &str) -> Result<PurchaseOutcome, RewardError> {
        self.catalog.checkout(&self.store, item_id)
    }

    pub fn calibrate(&mut self) -> Vec<CalibrationLine> {
        calibrate(&mut self.noise)
    }

    pub fn diagnose(&mut self) -> Vec<MaintenanceLine> {
        run_diagnostics(&mut self.noise)
    }

    pub fn clear_logs(&self) -> UserRecord {
        self.store.clear_logs()
    }

    pub fn reset(&self) -> UserRecord {
        self.store.reset()
    }
}
