//! Reward shop catalog and checkout
use crate::constants::RARE_NAME_MARKERS;
use crate::economy::UserEconomyStore;
use crate::storage::KeyValueStorage;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_REWARDS_DATA: &str = include_str!("../assets/data/rewards.json");

static BUILTIN: Lazy<RewardCatalog> = Lazy::new(|| {
    RewardCatalog::from_json(DEFAULT_REWARDS_DATA).unwrap_or_else(|err| {
        log::error!("bundled reward catalog is invalid: {err}");
        RewardCatalog::default()
    })
});

#[derive(Debug, Error)]
pub enum RewardError {
    #[error("unknown reward item: {0}")]
    UnknownItem(String),
    #[error("reward catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate reward id: {0}")]
    DuplicateId(String),
}

/// A single item offered in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RewardItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    /// Price in coins
    pub cost: u64,
    #[serde(default)]
    pub rare: bool,
}

impl RewardItem {
    /// Flagged rare, or named like one ("crystal", "golden").
    #[must_use]
    pub fn is_rare(&self) -> bool {
        self.rare || is_rare_name(&self.name)
    }
}

#[must_use]
pub fn is_rare_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    RARE_NAME_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RewardCatalog {
    pub items: Vec<RewardItem>,
}

impl RewardCatalog {
    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or two items share an id.
    pub fn from_json(json: &str) -> Result<Self, RewardError> {
        let catalog: Self = serde_json::from_str(json)?;
        for (idx, item) in catalog.items.iter().enumerate() {
            if catalog.items[..idx].iter().any(|prev| prev.id == item.id) {
                return Err(RewardError::DuplicateId(item.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// The catalog shipped with the site.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&RewardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Buy `id` through `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the catalog; a short balance is an
    /// outcome, not an error.
    pub fn checkout<S: KeyValueStorage>(
        &self,
        store: &UserEconomyStore<S>,
        id: &str,
    ) -> Result<PurchaseOutcome, RewardError> {
        let item = self
            .find(id)
            .ok_or_else(|| RewardError::UnknownItem(id.to_string()))?;
        Ok(match store.try_purchase(&item.name, item.cost) {
            Some(record) => PurchaseOutcome::Purchased {
                item: item.name.clone(),
                cost: item.cost,
                remaining: record.balance,
                rare: item.is_rare(),
            },
            None => PurchaseOutcome::InsufficientFunds {
                item: item.name.clone(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased {
        item: String,
        cost: u64,
        remaining: u64,
        rare: bool,
    },
    InsufficientFunds {
        item: String,
    },
}

impl PurchaseOutcome {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Purchased { .. })
    }

    /// Item name for the "unlocked" popup when a rare item was bought.
    #[must_use]
    pub fn rare_unlock(&self) -> Option<&str> {
        match self {
            Self::Purchased {
                item, rare: true, ..
            } => Some(item.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Purchased {
                item,
                cost,
                remaining,
                ..
            } => format!("Purchased {item} for {cost} coins. Remaining: {remaining}"),
            Self::InsufficientFunds { item } => format!("Not enough coins to buy {item}."),
        }
    }
}
