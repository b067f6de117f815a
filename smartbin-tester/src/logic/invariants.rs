//! Expected economy state, tracked independently of the store.
use anyhow::{Result, ensure};
use smartbin_core::{KeyValueStorage, UserRecord};

/// What the persisted record must look like after the actions applied so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub points: u64,
    pub balance: u64,
    pub purchases: Vec<String>,
    pub logs: usize,
    capacity: usize,
}

impl Ledger {
    #[must_use]
    pub fn from_record(record: &UserRecord, capacity: usize) -> Self {
        Self {
            points: record.points,
            balance: record.balance,
            purchases: record.purchases.clone(),
            logs: record.logs.len(),
            capacity,
        }
    }

    /// A detection was logged, rewarded or not.
    pub fn log_detection(&mut self, reward: u64) {
        self.points += reward;
        self.balance += reward;
        self.logs = (self.logs + 1).min(self.capacity);
    }

    /// Apply a purchase and report whether it should have gone through.
    pub fn purchase(&mut self, item: &str, cost: u64) -> bool {
        if self.balance < cost {
            return false;
        }
        self.balance -= cost;
        self.purchases.push(item.to_string());
        true
    }

    pub const fn clear_logs(&mut self) {
        self.logs = 0;
    }

    /// Compare a loaded record against the ledger.
    ///
    /// # Errors
    ///
    /// Returns the first mismatching field.
    pub fn verify(&self, record: &UserRecord) -> Result<()> {
        ensure!(
            record.points == self.points,
            "points {} != expected {}",
            record.points,
            self.points
        );
        ensure!(
            record.balance == self.balance,
            "balance {} != expected {}",
            record.balance,
            self.balance
        );
        ensure!(
            record.logs.len() == self.logs,
            "log count {} != expected {}",
            record.logs.len(),
            self.logs
        );
        ensure!(
            record.logs.len() <= self.capacity,
            "log count {} exceeds capacity {}",
            record.logs.len(),
            self.capacity
        );
        ensure!(
            record.purchases == self.purchases,
            "purchases {:?} != expected {:?}",
            record.purchases,
            self.purchases
        );
        ensure!(!record.username.trim().is_empty(), "username is empty");
        Ok(())
    }
}

/// Logs must be in timestamp order, oldest first.
///
/// # Errors
///
/// Returns an error naming the first out-of-order pair.
pub fn verify_log_order(record: &UserRecord) -> Result<()> {
    for pair in record.logs.windows(2) {
        ensure!(
            pair[0].timestamp <= pair[1].timestamp,
            "log out of order: {} after {}",
            pair[1].timestamp,
            pair[0].timestamp
        );
    }
    Ok(())
}

/// The stored document must decode as a complete record.
///
/// # Errors
///
/// Returns an error if nothing is stored or the payload is not a full record.
pub fn verify_stored<S: KeyValueStorage>(storage: &S, key: &str) -> Result<UserRecord> {
    let raw = storage
        .get(key)?
        .ok_or_else(|| anyhow::anyhow!("nothing stored under {key}"))?;
    let record: UserRecord = serde_json::from_str(&raw)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbin_core::EconomyConfig;

    fn ledger() -> Ledger {
        Ledger::from_record(&UserRecord::with_defaults(&EconomyConfig::default()), 3)
    }

    #[test]
    fn detections_saturate_log_count() {
        let mut ledger = ledger();
        for _ in 0..5 {
            ledger.log_detection(6);
        }
        assert_eq!(ledger.logs, 3);
        assert_eq!(ledger.points, 30);
        assert_eq!(ledger.balance, 230);
    }

    #[test]
    fn purchases_respect_balance() {
        let mut ledger = ledger();
        assert!(!ledger.purchase("Solar Lamp", 250));
        assert!(ledger.purchase("Eco Bottle", 50));
        assert_eq!(ledger.balance, 150);
        assert_eq!(ledger.purchases, ["Eco Bottle"]);
    }

    #[test]
    fn verify_reports_first_mismatch() {
        let ledger = ledger();
        let mut record = UserRecord::with_defaults(&EconomyConfig::default());
        assert!(ledger.verify(&record).is_ok());
        record.balance = 10;
        let err = ledger.verify(&record).unwrap_err().to_string();
        assert!(err.contains("balance 10"));
    }
}
