//! One seeded bin plus the ledger it is checked against.
use anyhow::{Context, Result, bail, ensure};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use smartbin_core::{
    ChaChaNoise, EconomyConfig, KeyValueStorage, PurchaseOutcome, SmartBin, UserEconomyStore,
    UserRecord, WasteCategory,
};

use super::invariants::{Ledger, verify_log_order, verify_stored};
use crate::storage::TesterStorage;

pub type TesterBin = SmartBin<TesterStorage, ChaChaNoise>;

/// Stream offset so action choice and sensor noise never share a sequence.
const ACTION_STREAM: u64 = 0x5EED_AC71;

/// Persisted payloads the corruption scenario plants, with the balance the
/// store must come back with.
const CORRUPT_PAYLOADS: &[(&str, Option<u64>)] = &[
    ("{not json", None),
    ("null", None),
    ("[]", None),
    (r#"{"username":"x","balance":-5}"#, None),
    (r#"{"points":"many"}"#, None),
    (r#"{"points":12}"#, Some(200)),
    (r#"{"username":"","points":4,"balance":31,"logs":[],"purchases":[]}"#, Some(31)),
];

pub struct Session {
    pub bin: TesterBin,
    pub ledger: Ledger,
    rng: ChaCha20Rng,
    clock: DateTime<Utc>,
    verbose: bool,
}

impl Session {
    /// Start from a freshly reset record on `storage`.
    pub fn new(storage: TesterStorage, config: EconomyConfig, seed: u64, verbose: bool) -> Self {
        let capacity = config.log_capacity;
        let bin = SmartBin::new(storage, config, ChaChaNoise::from_seed(seed));
        let record = bin.reset();
        Self {
            ledger: Ledger::from_record(&record, capacity),
            bin,
            rng: ChaCha20Rng::seed_from_u64(seed ^ ACTION_STREAM),
            clock: Utc
                .with_ymd_and_hms(2024, 4, 22, 9, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
            verbose,
        }
    }

    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += Duration::seconds(self.rng.gen_range(1..=90));
        self.clock
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    pub fn roll(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(0..sides)
    }

    fn note(&self, line: &str) {
        if self.verbose {
            println!("     {line}");
        }
        log::debug!("{line}");
    }

    /// Throw into a random slot and check the reward policy.
    pub fn throw_random(&mut self) -> Result<()> {
        let idx = self.rng.gen_range(0..WasteCategory::ALL.len());
        let category = WasteCategory::ALL[idx];
        let at = self.tick();
        let outcome = self
            .bin
            .throw(category.key(), at)
            .context("throw rejected a valid category")?;

        let result = &outcome.result;
        let config = self.bin.store().config();
        ensure!(
            (config.confidence_min..=config.confidence_max).contains(&result.confidence),
            "confidence {} outside range",
            result.confidence
        );
        let should_pass = category.matches(&result.detected)
            && result.confidence > config.acceptance_threshold;
        ensure!(
            result.was_correct == should_pass,
            "verdict {} for {} at {:.2} on {category}",
            result.was_correct,
            result.detected,
            result.confidence
        );
        let expected_reward = if should_pass {
            config.reward_for(result.confidence)
        } else {
            0
        };
        ensure!(
            outcome.points_awarded() == expected_reward,
            "awarded {} points, expected {expected_reward}",
            outcome.points_awarded()
        );
        ensure!(
            outcome.receipt.entry.waste_category_claimed == category.key(),
            "log entry claims {}",
            outcome.receipt.entry.waste_category_claimed
        );

        self.ledger.log_detection(expected_reward);
        self.note(&outcome.receipt.entry.display_line());
        Ok(())
    }

    /// Submit with nothing selected; nothing may change.
    pub fn throw_empty(&mut self) -> Result<()> {
        let before = self.bin.snapshot();
        let at = self.tick();
        if self.bin.throw("", at).is_ok() {
            bail!("empty selection was accepted");
        }
        ensure!(self.bin.snapshot() == before, "empty selection mutated state");
        Ok(())
    }

    /// Buy a random catalog item.
    pub fn buy_random(&mut self) -> Result<()> {
        let items = &self.bin.catalog().items;
        ensure!(!items.is_empty(), "catalog is empty");
        let item = items[self.rng.gen_range(0..items.len())].clone();

        let expected = self.ledger.purchase(&item.name, item.cost);
        let outcome = self.bin.buy(&item.id)?;
        ensure!(
            outcome.succeeded() == expected,
            "purchase of {} at {} returned {}",
            item.name,
            item.cost,
            outcome.succeeded()
        );
        if let PurchaseOutcome::Purchased { remaining, .. } = &outcome {
            ensure!(
                *remaining == self.ledger.balance,
                "remaining {remaining} != expected {}",
                self.ledger.balance
            );
        }
        ensure!(
            outcome.rare_unlock().is_some() == (expected && item.is_rare()),
            "rare popup mismatch for {}",
            item.name
        );
        self.note(&outcome.message());
        Ok(())
    }

    pub fn clear_logs(&mut self) -> Result<()> {
        let record = self.bin.clear_logs();
        self.ledger.clear_logs();
        ensure!(record.logs.is_empty(), "logs survived clearing");
        self.note("logs cleared");
        Ok(())
    }

    /// Plant a damaged record and check that loading repairs it.
    pub fn corrupt(&mut self) -> Result<()> {
        let (payload, balance) = CORRUPT_PAYLOADS[self.rng.gen_range(0..CORRUPT_PAYLOADS.len())];
        let key = self.bin.store().config().storage_key.clone();
        self.bin.store().storage().set(&key, payload)?;

        let record = self.bin.snapshot();
        let defaults = UserRecord::with_defaults(self.bin.store().config());
        match balance {
            None => ensure!(
                record == defaults,
                "payload {payload} did not reset to defaults"
            ),
            Some(balance) => ensure!(
                record.balance == balance,
                "payload {payload} loaded balance {}",
                record.balance
            ),
        }
        let stored = verify_stored(self.bin.store().storage(), &key)
            .with_context(|| format!("payload {payload} was not repaired in storage"))?;
        ensure!(stored == record, "stored record differs from loaded record");

        self.ledger = Ledger::from_record(&record, self.bin.store().config().log_capacity);
        self.note(&format!("recovered from {payload}"));
        Ok(())
    }

    /// Load through a second store over the same storage and round-trip it.
    pub fn reopen(&mut self) -> Result<()> {
        let storage = self.bin.store().storage().clone();
        let other = UserEconomyStore::new(storage, self.bin.store().config().clone());
        let loaded = other.load();
        ensure!(loaded == self.bin.snapshot(), "second store sees a different record");
        ensure!(other.save(&loaded), "save failed");
        ensure!(other.load() == loaded, "save/load round trip changed the record");
        Ok(())
    }

    /// Check the persisted record against the ledger.
    pub fn check(&self) -> Result<()> {
        let record = self.bin.snapshot();
        self.ledger.verify(&record)?;
        verify_log_order(&record)?;
        let key = &self.bin.store().config().storage_key;
        let stored = verify_stored(self.bin.store().storage(), key)?;
        ensure!(stored == record, "stored record differs from loaded record");
        Ok(())
    }

    /// Rebuild the ledger from storage after a failed check.
    pub fn resync(&mut self) {
        let record = self.bin.snapshot();
        self.ledger = Ledger::from_record(&record, self.bin.store().config().log_capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbin_core::MemoryStorage;

    fn session(seed: u64) -> Session {
        Session::new(
            TesterStorage::Memory(MemoryStorage::new()),
            EconomyConfig::default(),
            seed,
            false,
        )
    }

    #[test]
    fn throws_keep_ledger_in_step() {
        let mut s = session(7);
        for _ in 0..40 {
            s.throw_random().unwrap();
            s.check().unwrap();
        }
        assert_eq!(s.bin.snapshot().logs.len(), 40);
    }

    #[test]
    fn purchases_and_clears_keep_ledger_in_step() {
        let mut s = session(99);
        for n in 0..60 {
            if n % 3 == 0 {
                s.buy_random().unwrap();
            } else if n % 17 == 0 {
                s.clear_logs().unwrap();
            } else {
                s.throw_random().unwrap();
            }
            s.check().unwrap();
        }
    }

    #[test]
    fn every_corrupt_payload_is_repaired() {
        let mut s = session(3);
        for _ in 0..30 {
            s.corrupt().unwrap();
            s.check().unwrap();
        }
    }

    #[test]
    fn empty_selection_and_reopen_hold() {
        let mut s = session(11);
        s.throw_random().unwrap();
        s.throw_empty().unwrap();
        s.reopen().unwrap();
        s.check().unwrap();
    }

    #[test]
    fn small_log_cap_evicts_oldest() {
        let config = EconomyConfig {
            log_capacity: 5,
            ..EconomyConfig::default()
        };
        let mut s = Session::new(TesterStorage::Memory(MemoryStorage::new()), config, 21, false);
        for _ in 0..12 {
            s.throw_random().unwrap();
            s.check().unwrap();
        }
        assert_eq!(s.bin.snapshot().logs.len(), 5);
    }

    #[test]
    fn drifted_ledger_is_detected_then_resynced() {
        let mut s = session(5);
        s.ledger.balance += 1;
        assert!(s.check().is_err());
        s.resync();
        assert!(s.check().is_ok());
    }
}
