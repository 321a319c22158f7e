//! Warehouse inventory items and their derived stock level.

use super::{ClosedEnum, ParseEnumError, RecordDomainError, RecordId, ids::required_text};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock level derived from current and minimum stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// At or below half the minimum.
    Critical,
    /// At or below the minimum.
    Low,
    /// Above the minimum.
    Good,
}

impl ClosedEnum for StockLevel {
    const FIELD: &'static str = "stock level";
    const VARIANTS: &'static [Self] = &[Self::Critical, Self::Low, Self::Good];

    fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Low => "low",
            Self::Good => "good",
        }
    }
}

impl StockLevel {
    /// Classifies a stock count against its minimum.
    #[must_use]
    pub const fn classify(current: u32, min: u32) -> Self {
        // floor(min / 2) keeps `current * 2 <= min` exact
        if current <= min >> 1 {
            Self::Critical
        } else if current <= min {
            Self::Low
        } else {
            Self::Good
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StockLevel {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// An item held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: RecordId,
    item_name: String,
    current_stock: u32,
    min_stock: u32,
    max_stock: u32,
    last_updated: NaiveDate,
}

impl InventoryItem {
    /// Creates an inventory item.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError`] when the name is blank or
    /// `min_stock > max_stock`.
    pub fn new(
        item_name: impl Into<String>,
        current_stock: u32,
        min_stock: u32,
        max_stock: u32,
        last_updated: NaiveDate,
    ) -> Result<Self, RecordDomainError> {
        if min_stock > max_stock {
            return Err(RecordDomainError::InvertedStockBounds {
                min: min_stock,
                max: max_stock,
            });
        }
        Ok(Self {
            id: RecordId::new(),
            item_name: required_text("item name", item_name)?,
            current_stock,
            min_stock,
            max_stock,
            last_updated,
        })
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the item name.
    #[must_use]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Returns the units on hand.
    #[must_use]
    pub const fn current_stock(&self) -> u32 {
        self.current_stock
    }

    /// Returns the reorder threshold.
    #[must_use]
    pub const fn min_stock(&self) -> u32 {
        self.min_stock
    }

    /// Returns the storage capacity.
    #[must_use]
    pub const fn max_stock(&self) -> u32 {
        self.max_stock
    }

    /// Returns the date of the last count.
    #[must_use]
    pub const fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }

    /// Returns the derived stock level.
    #[must_use]
    pub const fn level(&self) -> StockLevel {
        StockLevel::classify(self.current_stock, self.min_stock)
    }
}
