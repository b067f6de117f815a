//! The persisted user record and its activity log entries.
use crate::config::EconomyConfig;
use crate::detection::DetectionResult;
use crate::waste::WasteCategory;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One detection as written to the activity log.
///
/// Older drafts of the site wrote `type`/`detected`/`correct`/`ts`; those
/// keys are still accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionLogEntry {
    #[serde(alias = "type")]
    pub waste_category_claimed: String,
    #[serde(alias = "detected")]
    pub chemical_detected: String,
    pub confidence: f64,
    #[serde(alias = "correct")]
    pub was_correct: bool,
    #[serde(alias = "ts", default)]
    pub timestamp: String,
}

impl DetectionLogEntry {
    #[must_use]
    pub fn from_result(claimed: WasteCategory, result: &DetectionResult, at: DateTime<Utc>) -> Self {
        Self {
            waste_category_claimed: claimed.key().to_string(),
            chemical_detected: result.detected.clone(),
            confidence: result.confidence,
            was_correct: result.was_correct,
            timestamp: iso_timestamp(at),
        }
    }

    /// `"{ts} | {CATEGORY} | {chemical} | Conf:{pct}% | ✔"` as the log page shows it.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn display_line(&self) -> String {
        let pct = (self.confidence * 100.0).round() as i64;
        let mark = if self.was_correct { "✔" } else { "✖" };
        format!(
            "{} | {} | {} | Conf:{pct}% | {mark}",
            self.timestamp,
            self.waste_category_claimed.to_uppercase(),
            self.chemical_detected
        )
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The single persisted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub points: u64,
    pub balance: u64,
    pub logs: Vec<DetectionLogEntry>,
    pub purchases: Vec<String>,
}

/// Wire shape with every field optional, so partial documents still load.
#[derive(Deserialize)]
struct StoredRecord {
    username: Option<String>,
    points: Option<u64>,
    balance: Option<u64>,
    logs: Option<Vec<DetectionLogEntry>>,
    purchases: Option<Vec<String>>,
}

impl UserRecord {
    /// Decode persisted JSON, filling absent fields from `cfg`.
    ///
    /// The flag is true when the stored document needed repairs and should be
    /// written back.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or a field has the wrong type.
    pub fn decode(raw: &str, cfg: &EconomyConfig) -> Result<(Self, bool), serde_json::Error> {
        let stored: StoredRecord = serde_json::from_str(raw)?;
        let incomplete = stored.username.is_none()
            || stored.points.is_none()
            || stored.balance.is_none()
            || stored.logs.is_none()
            || stored.purchases.is_none();
        let mut record = Self {
            username: stored
                .username
                .unwrap_or_else(|| cfg.default_username.clone()),
            points: stored.points.unwrap_or(cfg.starting_points),
            balance: stored.balance.unwrap_or(cfg.starting_balance),
            logs: stored.logs.unwrap_or_default(),
            purchases: stored.purchases.unwrap_or_default(),
        };
        let repaired = record.normalize(cfg);
        Ok((record, incomplete || repaired))
    }

    #[must_use]
    pub fn with_defaults(cfg: &EconomyConfig) -> Self {
        Self {
            username: cfg.default_username.clone(),
            points: cfg.starting_points,
            balance: cfg.starting_balance,
            logs: Vec::new(),
            purchases: Vec::new(),
        }
    }

    /// Repair a decoded record: fill an empty username, drop log entries
    /// whose confidence is not a fraction and trim an oversized log down to
    /// its newest entries.
    fn normalize(&mut self, cfg: &EconomyConfig) -> bool {
        let mut changed = false;
        if self.username.trim().is_empty() {
            self.username.clone_from(&cfg.default_username);
            changed = true;
        }
        let before = self.logs.len();
        self.logs.retain(|entry| (0.0..=1.0).contains(&entry.confidence));
        if self.logs.len() != before {
            changed = true;
        }
        if self.logs.len() > cfg.log_capacity {
            let excess = self.logs.len() - cfg.log_capacity;
            self.logs.drain(..excess);
            changed = true;
        }
        changed
    }

    /// Append to the log, evicting the oldest entries past `capacity`.
    pub(crate) fn push_log(&mut self, entry: DetectionLogEntry, capacity: usize) {
        self.logs.push(entry);
        if self.logs.len() > capacity {
            let excess = self.logs.len() - capacity;
            self.logs.drain(..excess);
        }
    }

    /// The newest `n` entries, newest first.
    #[must_use]
    pub fn recent_logs(&self, n: usize) -> Vec<&DetectionLogEntry> {
        self.logs.iter().rev().take(n).collect()
    }

    #[must_use]
    pub fn status(&self) -> StatusSummary {
        StatusSummary {
            username: self.username.clone(),
            points: self.points,
            balance: self.balance,
            logs_stored: self.logs.len(),
            purchases: if self.purchases.is_empty() {
                "None".to_string()
            } else {
                self.purchases.join(", ")
            },
        }
    }
}

/// Flattened view for the status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub username: String,
    pub points: u64,
    pub balance: u64,
    pub logs_stored: usize,
    pub purchases: String,
}
