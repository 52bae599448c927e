//! # Domain Types
//!
//! Core domain types used throughout Grocer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Bill       │   │    BillLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name (customer)│   │  name (frozen)  │       │
//! │  │  category       │   │  date           │   │  qty            │       │
//! │  │  quantity       │   │  items ─────────┼──►│  price (frozen) │       │
//! │  │  price          │   │  total          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │ QuantityLabel   │   │ LineSelection   │       │
//! │  │  Fruits, Dairy… │   │ "1 kg", "1 L"…  │   │ item_name, qty  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Layout
//! Field names here are the field names on disk. Items are
//! `{name, category, quantity, price}` and bills are
//! `{name, date, items: [{name, qty, price}], total}`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price};

// =============================================================================
// Category
// =============================================================================

/// The shelf an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    Snacks,
    Beverages,
    #[default]
    Other,
}

impl Category {
    /// Every category, in the order pickers show them.
    pub const ALL: [Category; 6] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Dairy,
        Category::Snacks,
        Category::Beverages,
        Category::Other,
    ];

    /// Returns the label stored on disk.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
            Category::Snacks => "Snacks",
            Category::Beverages => "Beverages",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Quantity Label
// =============================================================================

/// Descriptive pack size of an item.
///
/// Purely informational: billing never reads or decrements it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuantityLabel {
    #[serde(rename = "1/2 kg")]
    HalfKg,
    #[default]
    #[serde(rename = "1 kg")]
    OneKg,
    #[serde(rename = "2 kg")]
    TwoKg,
    #[serde(rename = "5 kg")]
    FiveKg,
    #[serde(rename = "10 kg")]
    TenKg,
    #[serde(rename = "500 ml")]
    FiveHundredMl,
    #[serde(rename = "1 L")]
    OneLitre,
    #[serde(rename = "2 L")]
    TwoLitre,
    #[serde(rename = "5 L")]
    FiveLitre,
}

impl QuantityLabel {
    /// Every label, in the order pickers show them.
    pub const ALL: [QuantityLabel; 9] = [
        QuantityLabel::HalfKg,
        QuantityLabel::OneKg,
        QuantityLabel::TwoKg,
        QuantityLabel::FiveKg,
        QuantityLabel::TenKg,
        QuantityLabel::FiveHundredMl,
        QuantityLabel::OneLitre,
        QuantityLabel::TwoLitre,
        QuantityLabel::FiveLitre,
    ];

    /// Returns the label stored on disk.
    pub const fn as_str(&self) -> &'static str {
        match self {
            QuantityLabel::HalfKg => "1/2 kg",
            QuantityLabel::OneKg => "1 kg",
            QuantityLabel::TwoKg => "2 kg",
            QuantityLabel::FiveKg => "5 kg",
            QuantityLabel::TenKg => "10 kg",
            QuantityLabel::FiveHundredMl => "500 ml",
            QuantityLabel::OneLitre => "1 L",
            QuantityLabel::TwoLitre => "2 L",
            QuantityLabel::FiveLitre => "5 L",
        }
    }
}

impl fmt::Display for QuantityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the stored label in any case, with or without the inner space
/// (`"1 kg"`, `"1KG"`, `"500ml"`).
impl FromStr for QuantityLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = |v: &str| -> String {
            v.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_lowercase()
        };
        let wanted = compact(s);
        QuantityLabel::ALL
            .into_iter()
            .find(|q| compact(q.as_str()) == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "quantity".to_string(),
                allowed: QuantityLabel::ALL
                    .iter()
                    .map(|q| q.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Item
// =============================================================================

/// A catalog entry describing a sellable product.
///
/// Names are not unique; lookups resolve to the first match in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the lookup key (case-insensitive).
    pub name: String,

    /// Shelf category. Older snapshots without one load as `Other`.
    #[serde(default)]
    pub category: Category,

    /// Pack size label. Older snapshots without one load as `1 kg`.
    #[serde(default)]
    pub quantity: QuantityLabel,

    /// Unit price in whole currency units (minimum 1).
    pub price: i64,
}

impl Item {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price)
    }
}

// =============================================================================
// Item Draft
// =============================================================================

/// Operator input for adding or editing an item.
///
/// Nothing reaches the catalog without passing through
/// [`ItemDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub quantity: QuantityLabel,
    pub price: i64,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        quantity: QuantityLabel,
        price: i64,
    ) -> Self {
        ItemDraft {
            name: name.into(),
            category,
            quantity,
            price,
        }
    }

    /// Pre-fills a draft with an existing item's values (edit forms start
    /// from the current record).
    pub fn from_item(item: &Item) -> Self {
        ItemDraft {
            name: item.name.clone(),
            category: item.category,
            quantity: item.quantity,
            price: item.price,
        }
    }

    /// Checks the draft and produces the item to store.
    ///
    /// ## Rules
    /// - name: non-blank, at most 200 characters, stored trimmed
    /// - price: at least 1
    pub fn validate(self) -> Result<Item, ValidationError> {
        validate_item_name(&self.name)?;
        validate_price(self.price)?;

        Ok(Item {
            name: self.name.trim().to_string(),
            category: self.category,
            quantity: self.quantity,
            price: self.price,
        })
    }
}

// =============================================================================
// Bill Line
// =============================================================================

/// A line on a bill.
/// Uses snapshot pattern to freeze item data at time of billing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    /// Item name at time of billing (frozen).
    pub name: String,
    /// Units bought.
    pub qty: i64,
    /// Unit price at time of billing (frozen).
    pub price: i64,
}

impl BillLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_units(self.price)
    }

    /// Returns `price × qty`, or `None` if it overflows.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price().checked_multiply_quantity(self.qty)
    }
}

// =============================================================================
// Bill
// =============================================================================

/// An immutable record of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Customer name.
    pub name: String,
    /// Local time the bill was generated.
    #[serde(with = "bill_date")]
    pub date: NaiveDateTime,
    /// Purchased lines, in selection order.
    pub items: Vec<BillLine>,
    /// Sum of all line totals.
    pub total: i64,
}

impl Bill {
    /// Returns the stored total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_units(self.total)
    }

    /// Recomputes the total from the lines.
    pub fn computed_total(&self) -> Option<Money> {
        self.items.iter().try_fold(Money::zero(), |acc, line| {
            line.line_total().and_then(|t| acc.checked_add(t))
        })
    }

    /// True when the stored total equals the sum of the line totals.
    pub fn is_consistent(&self) -> bool {
        self.computed_total() == Some(self.total())
    }

    /// The date as it appears on disk and on receipts.
    pub fn date_string(&self) -> String {
        self.date.format(crate::BILL_DATE_FORMAT).to_string()
    }
}

/// `YYYY-MM-DD HH:MM:SS` (de)serialization for [`Bill::date`].
mod bill_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::BILL_DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(BILL_DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, BILL_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Line Selection
// =============================================================================

/// One billing selection: which item, and how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSelection {
    pub item_name: String,
    pub qty: i64,
}

impl LineSelection {
    pub fn new(item_name: impl Into<String>, qty: i64) -> Self {
        LineSelection {
            item_name: item_name.into(),
            qty,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
