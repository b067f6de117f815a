//! Centralized tuning constants for the Smart Bin economy.
//!
//! These values define the reward math and persistence limits. Keeping them
//! together means the economy can only be retuned through reviewed code
//! changes; `EconomyConfig::default()` is built from them.

// Persistence --------------------------------------------------------------
pub const STORAGE_KEY: &str = "SMART_BIN_USER";
pub const DEFAULT_USERNAME: &str = "Sushanth";
pub const STARTING_POINTS: u64 = 0;
pub const STARTING_BALANCE: u64 = 200;
pub const LOG_CAPACITY: usize = 200;
pub const RECENT_LOG_WINDOW: usize = 50;

// Detection ----------------------------------------------------------------
pub const CONFIDENCE_MIN: f64 = 0.60;
pub const CONFIDENCE_MAX: f64 = 1.00;
pub const ACCEPTANCE_THRESHOLD: f64 = 0.75;

// Rewards ------------------------------------------------------------------
pub const REWARD_FLOOR: u64 = 5;
pub const REWARD_SCALE: f64 = 10.0;
pub const RARE_NAME_MARKERS: [&str; 2] = ["crystal", "golden"];

// Calibration --------------------------------------------------------------
pub const CALIBRATION_OFFSET_SPAN: f64 = 0.05;
pub const CALIBRATION_MULTIPLIER_MIN: f64 = 0.9;
pub const CALIBRATION_MULTIPLIER_MAX: f64 = 1.1;

// Maintenance --------------------------------------------------------------
pub const HEALTH_MIN: u8 = 85;
pub const HEALTH_MAX: u8 = 100;
pub const HEALTH_OK_THRESHOLD: u8 = 90;
pub const TEMPERATURE_MIN_C: f64 = 22.0;
pub const TEMPERATURE_MAX_C: f64 = 30.0;

// Presentation timing ------------------------------------------------------
pub const DIAGNOSTIC_DELAY_MS: i32 = 900;
pub const RARE_POPUP_MS: i32 = 2_000;

/// Round to two decimals, the precision every simulated reading is shown at.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
