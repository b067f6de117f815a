//! Cosmetic calibration and maintenance reports for the sensor pages.
use crate::constants::{
    CALIBRATION_MULTIPLIER_MAX, CALIBRATION_MULTIPLIER_MIN, CALIBRATION_OFFSET_SPAN, HEALTH_MAX,
    HEALTH_MIN, HEALTH_OK_THRESHOLD, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C, round2,
};
use crate::noise::SensorNoise;
use crate::waste::WasteCategory;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationLine {
    pub sensor: WasteCategory,
    pub offset: f64,
    pub multiplier: f64,
}

impl fmt::Display for CalibrationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} recalibrated (offset={}, multiplier={})",
            self.sensor.key().to_uppercase(),
            self.offset,
            self.multiplier
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SensorStatus {
    Ok,
    NeedsCleaning,
}

impl SensorStatus {
    #[must_use]
    pub const fn from_health(health: u8) -> Self {
        if health >= HEALTH_OK_THRESHOLD {
            Self::Ok
        } else {
            Self::NeedsCleaning
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NeedsCleaning => "Needs Cleaning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceLine {
    pub sensor: WasteCategory,
    pub health: u8,
    pub temperature_c: f64,
    pub status: SensorStatus,
}

impl fmt::Display for MaintenanceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Health {}% | Temp {}°C → {}",
            self.sensor.key().to_uppercase(),
            self.health,
            self.temperature_c,
            self.status.label()
        )
    }
}

/// One recalibration line per sensor, in table order.
pub fn calibrate<N: SensorNoise>(noise: &mut N) -> Vec<CalibrationLine> {
    WasteCategory::ALL
        .into_iter()
        .map(|sensor| {
            let offset = round2(noise.uniform(-CALIBRATION_OFFSET_SPAN, CALIBRATION_OFFSET_SPAN));
            let multiplier = round2(
                noise.uniform(CALIBRATION_MULTIPLIER_MIN, CALIBRATION_MULTIPLIER_MAX),
            );
            CalibrationLine {
                sensor,
                offset,
                multiplier,
            }
        })
        .collect()
}

/// One health check per sensor, in table order.
pub fn run_diagnostics<N: SensorNoise>(noise: &mut N) -> Vec<MaintenanceLine> {
    WasteCategory::ALL
        .into_iter()
        .map(|sensor| {
            let health = noise.integer(HEALTH_MIN, HEALTH_MAX);
            let temperature_c = round2(noise.uniform(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C));
            MaintenanceLine {
                sensor,
                health,
                temperature_c,
                status: SensorStatus::from_health(health),
            }
        })
        .collect()
}
