//! One-shot detection simulation: pick a substance, roll a confidence, judge.
use crate::config::EconomyConfig;
use crate::constants::round2;
use crate::noise::SensorNoise;
use crate::waste::{WasteCategory, all_substances};
use serde::{Deserialize, Serialize};

/// Outcome of a single simulated sensor sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub detected: String,
    pub confidence: f64,
    pub was_correct: bool,
}

impl DetectionResult {
    /// Confidence as a whole percentage for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn confidence_pct(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}

/// Simulates the bin's sensor array.
///
/// The detected substance comes from the whole signature table, not just the
/// claimed category, so misclassifications happen naturally.
#[derive(Debug, Clone)]
pub struct DetectionSimulator {
    pool: Vec<&'static str>,
    confidence_min: f64,
    confidence_max: f64,
    threshold: f64,
}

impl Default for DetectionSimulator {
    fn default() -> Self {
        Self::from_config(&EconomyConfig::default())
    }
}

impl DetectionSimulator {
    #[must_use]
    pub fn from_config(cfg: &EconomyConfig) -> Self {
        Self {
            pool: all_substances(),
            confidence_min: cfg.confidence_min,
            confidence_max: cfg.confidence_max,
            threshold: cfg.acceptance_threshold,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn detect<N: SensorNoise>(&self, claimed: WasteCategory, noise: &mut N) -> DetectionResult {
        let idx = noise.pick_index(&self.pool) % self.pool.len();
        let detected = self.pool[idx];
        let confidence = round2(noise.uniform(self.confidence_min, self.confidence_max));
        DetectionResult {
            detected: detected.to_string(),
            confidence,
            was_correct: self.judge(claimed, detected, confidence),
        }
    }

    /// Both conditions are required: a matching substance and a confidence
    /// strictly above the threshold.
    #[must_use]
    pub fn judge(&self, claimed: WasteCategory, detected: &str, confidence: f64) -> bool {
        claimed.matches(detected) && confidence > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{RandomNoise, ScriptedNoise};

    fn detect_scripted(claimed: WasteCategory, substance: &str, confidence: f64) -> DetectionResult {
        let sim = DetectionSimulator::default();
        let mut noise = ScriptedNoise::detection(substance, confidence);
        sim.detect(claimed, &mut noise)
    }

    #[test]
    fn wrong_substance_fails_even_at_high_confidence() {
        let result = detect_scripted(WasteCategory::Organic, "Fe", 0.99);
        assert_eq!(result.detected, "Fe");
        assert!(!result.was_correct);
    }

    #[test]
    fn right_substance_fails_at_low_confidence() {
        let result = detect_scripted(WasteCategory::Organic, "CH4", 0.70);
        assert_eq!(result.detected, "CH4");
        assert!(!result.was_correct);
    }

    #[test]
    fn right_substance_with_confidence_passes() {
        let result = detect_scripted(WasteCategory::Organic, "CO2", 0.90);
        assert!(result.was_correct);
        assert_eq!(result.confidence_pct(), 90);
    }

    #[test]
    fn threshold_is_strict() {
        let result = detect_scripted(WasteCategory::Glass, "SiO2", 0.75);
        assert!(!result.was_correct);
        let result = detect_scripted(WasteCategory::Glass, "SiO2", 0.76);
        assert!(result.was_correct);
    }

    #[test]
    fn random_detections_stay_in_window() {
        let sim = DetectionSimulator::default();
        let mut noise = RandomNoise::from_seed(42);
        let mut correct = 0;
        for i in 0..500 {
            let claimed = WasteCategory::ALL[i % 4];
            let result = sim.detect(claimed, &mut noise);
            assert!((0.6..=1.0).contains(&result.confidence));
            assert_eq!(
                result.was_correct,
                claimed.matches(&result.detected) && result.confidence > 0.75
            );
            if result.was_correct {
                correct += 1;
            }
        }
        assert!(correct > 0 && correct < 500);
    }
}
