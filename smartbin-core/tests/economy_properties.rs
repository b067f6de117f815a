use chrono::{TimeZone, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smartbin_core::{
    DetectionLogEntry, EconomyConfig, KeyValueStorage, MemoryStorage, UserEconomyStore,
    UserRecord,
};

const SEEDS: [u64; 4] = [1, 42, 1337, 0xDEAD_BEEF];

fn entry(n: usize, correct: bool, confidence: f64) -> DetectionLogEntry {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(n as i64);
    DetectionLogEntry {
        waste_category_claimed: "organic".into(),
        chemical_detected: "CO2".into(),
        confidence,
        was_correct: correct,
        timestamp: smartbin_core::iso_timestamp(at),
    }
}

#[test]
fn replayed_rewards_sum_and_never_decrease() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let store = UserEconomyStore::with_defaults(MemoryStorage::new());
        let start = store.load();
        let mut expected = 0u64;
        let mut prev = start.clone();
        for n in 0..300 {
            let correct = rng.gen_bool(0.4);
            let reward = rng.gen_range(0..=12);
            if correct {
                expected += reward;
            }
            let record = store.record_detection(entry(n, correct, 0.8), reward);
            assert!(record.points >= prev.points, "points decreased (seed {seed})");
            assert!(record.balance >= prev.balance, "balance decreased (seed {seed})");
            prev = record;
        }
        assert_eq!(prev.points, start.points + expected);
        assert_eq!(prev.balance, start.balance + expected);
    }
}

#[test]
fn purchases_debit_exactly_or_not_at_all() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let store = UserEconomyStore::with_defaults(MemoryStorage::new());
        for n in 0..400 {
            if rng.gen_bool(0.5) {
                store.record_detection(entry(n, true, 0.9), rng.gen_range(5..=10));
                continue;
            }
            let before = store.load();
            let cost = rng.gen_range(0..=120);
            let bought = store.purchase(&format!("item-{n}"), cost);
            let after = store.load();
            assert_eq!(bought, before.balance >= cost);
            if bought {
                assert_eq!(after.balance, before.balance - cost);
                assert_eq!(after.purchases.len(), before.purchases.len() + 1);
                assert_eq!(after.purchases.last().map(String::as_str), Some(format!("item-{n}").as_str()));
            } else {
                assert_eq!(after, before);
            }
        }
    }
}

#[test]
fn log_keeps_newest_entries_up_to_capacity() {
    let cfg = EconomyConfig {
        log_capacity: 25,
        ..EconomyConfig::default()
    };
    let store = UserEconomyStore::new(MemoryStorage::new(), cfg);
    let total = 103;
    let mut record = store.load();
    for n in 0..total {
        record = store.record_detection(entry(n, n % 2 == 0, 0.8), 5);
        assert!(record.logs.len() <= 25);
    }
    let expected: Vec<String> = (total - 25..total)
        .map(|n| entry(n, n % 2 == 0, 0.8).timestamp)
        .collect();
    let kept: Vec<String> = record.logs.iter().map(|l| l.timestamp.clone()).collect();
    assert_eq!(kept, expected);
}

#[test]
fn default_capacity_is_two_hundred() {
    let store = UserEconomyStore::with_defaults(MemoryStorage::new());
    let mut record = store.load();
    for n in 0..230 {
        record = store.record_detection(entry(n, false, 0.7), 0);
    }
    assert_eq!(record.logs.len(), 200);
    assert_eq!(record.logs[0].timestamp, entry(30, false, 0.7).timestamp);
}

#[test]
fn save_then_load_round_trips() {
    let store = UserEconomyStore::with_defaults(MemoryStorage::new());
    store.record_detection(entry(0, true, 0.87), 8);
    store.record_detection(entry(1, false, 0.61), 0);
    store.purchase("Seed Pack", 30);

    let loaded = store.load();
    assert!(store.save(&loaded));
    assert_eq!(store.load(), loaded);

    let other = UserEconomyStore::with_defaults(store.storage().clone());
    assert_eq!(other.load(), loaded);
}

#[test]
fn short_balance_purchase_is_refused() {
    let store = UserEconomyStore::with_defaults(MemoryStorage::new());
    assert_eq!(store.load().balance, 200);
    assert!(!store.purchase("Solar Lamp", 250));
    let record = store.load();
    assert_eq!(record.balance, 200);
    assert!(record.purchases.is_empty());
}

#[test]
fn empty_storage_loads_and_persists_defaults() {
    let storage = MemoryStorage::new();
    let store = UserEconomyStore::with_defaults(storage.clone());
    let record = store.load();
    assert_eq!(record, UserRecord::with_defaults(&EconomyConfig::default()));
    let raw = storage.get("SMART_BIN_USER").unwrap().expect("defaults persisted");
    let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted["username"], "Sushanth");
    assert_eq!(persisted["points"], 0);
    assert_eq!(persisted["balance"], 200);
    assert_eq!(persisted["logs"], serde_json::json!([]));
    assert_eq!(persisted["purchases"], serde_json::json!([]));
}

#[test]
fn unavailable_storage_still_serves_defaults() {
    struct Broken;
    impl KeyValueStorage for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>, smartbin_core::StorageError> {
            Err(smartbin_core::StorageError::Unavailable("private mode".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), smartbin_core::StorageError> {
            Err(smartbin_core::StorageError::Unavailable("private mode".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), smartbin_core::StorageError> {
            Ok(())
        }
    }

    let store = UserEconomyStore::with_defaults(Broken);
    assert_eq!(store.load().balance, 200);
    let record = store.record_detection(entry(0, true, 0.9), 9);
    assert_eq!(record.balance, 209);
    assert!(!store.purchase("Eco Bottle", 500));
    assert!(store.purchase("Eco Bottle", 50));
}
