//! The persisted points/balance economy.
//!
//! Every operation reads the whole record, modifies it and writes it back.
//! Storage trouble never reaches the caller: unreadable data falls back to the
//! defaults and failed writes are logged. Until a write lands again the store
//! works from its own unsaved copy, so a session never loses its progress.
use std::cell::{Cell, RefCell};

use crate::config::EconomyConfig;
use crate::detection::DetectionResult;
use crate::record::{DetectionLogEntry, UserRecord};
use crate::storage::KeyValueStorage;
use crate::waste::WasteCategory;
use chrono::{DateTime, Utc};

/// What a credited detection produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReceipt {
    pub entry: DetectionLogEntry,
    pub points_awarded: u64,
    pub record: UserRecord,
}

pub struct UserEconomyStore<S: KeyValueStorage> {
    storage: S,
    config: EconomyConfig,
    /// Latest record this store loaded or wrote.
    session: RefCell<Option<UserRecord>>,
    /// Set while the session copy is ahead of storage.
    unsaved: Cell<bool>,
}

impl<S: KeyValueStorage> UserEconomyStore<S> {
    pub const fn new(storage: S, config: EconomyConfig) -> Self {
        Self {
            storage,
            config,
            session: RefCell::new(None),
            unsaved: Cell::new(false),
        }
    }

    pub fn with_defaults(storage: S) -> Self {
        Self::new(storage, EconomyConfig::default())
    }

    pub const fn config(&self) -> &EconomyConfig {
        &self.config
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn key(&self) -> &str {
        &self.config.storage_key
    }

    /// Whether the last write failed and storage lags behind the session.
    pub fn has_unsaved(&self) -> bool {
        self.unsaved.get()
    }

    fn session_copy(&self) -> Option<UserRecord> {
        self.session.borrow().clone()
    }

    /// Current record, initializing and persisting defaults when nothing
    /// usable is stored. While a write is outstanding, or storage cannot be
    /// read, the session copy wins.
    pub fn load(&self) -> UserRecord {
        if self.unsaved.get() {
            if let Some(record) = self.session_copy() {
                return record;
            }
        }
        let raw = match self.storage.get(self.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no record under {}, creating defaults", self.key());
                return self.init_defaults();
            }
            Err(err) => {
                if let Some(record) = self.session_copy() {
                    log::warn!("failed to read {}: {err}; keeping session copy", self.key());
                    return record;
                }
                log::warn!("failed to read {}: {err}; using defaults", self.key());
                return self.init_defaults();
            }
        };

        match UserRecord::decode(&raw, &self.config) {
            Ok((record, repaired)) => {
                if repaired {
                    self.save(&record);
                } else {
                    *self.session.borrow_mut() = Some(record.clone());
                }
                record
            }
            Err(err) => {
                log::warn!("record under {} is malformed ({err}); resetting", self.key());
                self.init_defaults()
            }
        }
    }

    fn init_defaults(&self) -> UserRecord {
        let record = UserRecord::with_defaults(&self.config);
        self.save(&record);
        record
    }

    /// Persist the full record. Returns whether the write landed; on failure
    /// the record is kept in memory and served by [`Self::load`] until a
    /// later write succeeds.
    pub fn save(&self, record: &UserRecord) -> bool {
        let written = match serde_json::to_string(record) {
            Ok(json) => match self.storage.set(self.key(), &json) {
                Ok(()) => true,
                Err(err) => {
                    log::error!("failed to save {}: {err}", self.key());
                    false
                }
            },
            Err(err) => {
                log::error!("failed to encode record: {err}");
                false
            }
        };
        *self.session.borrow_mut() = Some(record.clone());
        self.unsaved.set(!written);
        written
    }

    /// Append `entry` to the log and, when it was correct, credit
    /// `reward_points` to both points and balance.
    pub fn record_detection(&self, entry: DetectionLogEntry, reward_points: u64) -> UserRecord {
        let mut record = self.load();
        let credited = entry.was_correct;
        record.push_log(entry, self.config.log_capacity);
        if credited {
            record.points = record.points.saturating_add(reward_points);
            record.balance = record.balance.saturating_add(reward_points);
        }
        self.save(&record);
        record
    }

    /// Log a detection result and apply the configured reward policy.
    pub fn credit_detection(
        &self,
        claimed: WasteCategory,
        result: &DetectionResult,
        at: DateTime<Utc>,
    ) -> DetectionReceipt {
        let entry = DetectionLogEntry::from_result(claimed, result, at);
        let points_awarded = if result.was_correct {
            self.config.reward_for(result.confidence)
        } else {
            0
        };
        let record = self.record_detection(entry.clone(), points_awarded);
        DetectionReceipt {
            entry,
            points_awarded,
            record,
        }
    }

    /// Debit `cost` and record `item`, or change nothing when the balance is
    /// short.
    pub fn purchase(&self, item: &str, cost: u64) -> bool {
        self.try_purchase(item, cost).is_some()
    }

    /// Like [`Self::purchase`], returning the updated record on success.
    pub fn try_purchase(&self, item: &str, cost: u64) -> Option<UserRecord> {
        let mut record = self.load();
        if record.balance < cost {
            log::debug!("purchase of {item} refused: balance {} < {cost}", record.balance);
            return None;
        }
        record.balance -= cost;
        record.purchases.push(item.to_string());
        self.save(&record);
        Some(record)
    }

    /// Empty the activity log, keeping points, balance and purchases.
    pub fn clear_logs(&self) -> UserRecord {
        let mut record = self.load();
        record.logs.clear();
        self.save(&record);
        record
    }

    /// Throw everything away and start over from the defaults.
    pub fn reset(&self) -> UserRecord {
        log::info!("resetting record under {}", self.key());
        self.session.borrow_mut().take();
        self.unsaved.set(false);
        self.init_defaults()
    }
}
