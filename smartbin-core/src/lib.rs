//! Smart Bin core
//!
//! Platform-agnostic logic for the Smart Bin demo site: the persisted
//! points/balance economy, the randomized detection simulator, the reward
//! shop and the cosmetic sensor reports. Nothing here touches the DOM; pages
//! plug in a [`KeyValueStorage`] backend and a [`SensorNoise`] source.

pub mod config;
pub mod constants;
pub mod detection;
pub mod diagnostics;
pub mod economy;
pub mod noise;
pub mod record;
pub mod rewards;
pub mod session;
pub mod storage;
pub mod waste;

// Re-export commonly used types
pub use config::{ConfigError, EconomyConfig};
pub use detection::{DetectionResult, DetectionSimulator};
pub use diagnostics::{
    CalibrationLine, MaintenanceLine, SensorStatus, calibrate, run_diagnostics,
};
pub use economy::{DetectionReceipt, UserEconomyStore};
pub use noise::{ChaChaNoise, RandomNoise, ScriptedNoise, SensorNoise};
pub use record::{DetectionLogEntry, StatusSummary, UserRecord, iso_timestamp};
pub use rewards::{PurchaseOutcome, RewardCatalog, RewardError, RewardItem, is_rare_name};
pub use session::{SmartBin, ThrowOutcome};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use waste::{CategoryError, WasteCategory, all_substances};
