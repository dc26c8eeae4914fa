use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::money::Cents;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Wire format for a submitted receipt, before validation.
///
/// Every field is optional so that a missing or null field deserializes into
/// a draft that [`ReceiptDraft::validate`] can reject with a precise error,
/// instead of failing opaquely inside the JSON layer.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDraft {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub items: Option<Vec<ItemDraft>>,
    pub total: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub short_description: Option<String>,
    pub price: Option<String>,
}

/// Domain model for a purchase receipt that passed validation.
///
/// Immutable once constructed; the scoring rules read it and never have to
/// parse or fail.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub short_description: String,
    pub price: Cents,
}

/// A receipt together with the points awarded to it.
///
/// Created once when a submission is accepted; the points are never
/// recomputed afterwards.
///
#[derive(Debug, Clone)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: u64,
}

/// Why a submitted receipt draft was rejected.
///
/// Field names in the variants are the wire names the client sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid monetary amount {0:?}")]
    InvalidAmount(String),

    #[error("invalid purchase date {0:?}")]
    InvalidDate(String),

    #[error("invalid purchase time {0:?}")]
    InvalidTime(String),
}

impl ReceiptDraft {
    /// Validates the draft and converts it into a typed [`Receipt`].
    ///
    /// A required field that is missing, null, or an empty string is rejected
    /// as [`ReceiptError::MissingField`]. An empty `items` sequence is
    /// accepted; such a receipt simply earns nothing from the item rules.
    /// Present-but-unparseable amounts, dates, and times are rejected here so
    /// that scoring never sees them.
    ///
    pub fn validate(self) -> Result<Receipt, ReceiptError> {
        let retailer = require(self.retailer, "retailer")?;
        let date_raw = require(self.purchase_date, "purchaseDate")?;
        let time_raw = require(self.purchase_time, "purchaseTime")?;
        let total_raw = require(self.total, "total")?;
        let item_drafts = self.items.ok_or(ReceiptError::MissingField("items"))?;

        let purchase_date = NaiveDate::parse_from_str(&date_raw, DATE_FORMAT)
            .map_err(|_| ReceiptError::InvalidDate(date_raw))?;
        let purchase_time = NaiveTime::parse_from_str(&time_raw, TIME_FORMAT)
            .map_err(|_| ReceiptError::InvalidTime(time_raw))?;
        let total = total_raw
            .parse()
            .map_err(|_| ReceiptError::InvalidAmount(total_raw))?;
        let items = item_drafts
            .into_iter()
            .map(ItemDraft::validate)
            .collect::<Result<_, _>>()?;

        Ok(Receipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

impl ItemDraft {
    /// Validates a single item draft.
    ///
    /// An empty description is allowed (it still scores under the
    /// description-length rule); a missing one is not.
    fn validate(self) -> Result<Item, ReceiptError> {
        let short_description = self
            .short_description
            .ok_or(ReceiptError::MissingField("shortDescription"))?;
        let price_raw = require(self.price, "price")?;
        let price = price_raw
            .parse()
            .map_err(|_| ReceiptError::InvalidAmount(price_raw))?;

        Ok(Item {
            short_description,
            price,
        })
    }
}

fn require(field: Option<String>, name: &'static str) -> Result<String, ReceiptError> {
    field
        .filter(|value| !value.is_empty())
        .ok_or(ReceiptError::MissingField(name))
}

impl Receipt {
    /// Creates a simple mock receipt with random prices.
    ///
    /// Used as the sample payload served on the index route and as a handy
    /// fixture in tests.
    pub fn simple_mock() -> Self {
        let price = Cents(rand::random::<u64>() % 10_000);
        Self {
            retailer: "Corner Market".to_string(),
            purchase_date: chrono::Utc::now().date_naive(),
            purchase_time: NaiveTime::from_hms_opt(14, 33, 0).unwrap(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price,
            }],
            total: price,
        }
    }
}

impl From<&Receipt> for ReceiptDraft {
    fn from(receipt: &Receipt) -> Self {
        Self {
            retailer: Some(receipt.retailer.clone()),
            purchase_date: Some(receipt.purchase_date.format(DATE_FORMAT).to_string()),
            purchase_time: Some(receipt.purchase_time.format(TIME_FORMAT).to_string()),
            items: Some(receipt.items.iter().map(ItemDraft::from).collect()),
            total: Some(receipt.total.to_string()),
        }
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            short_description: Some(item.short_description.clone()),
            price: Some(item.price.to_string()),
        }
    }
}
