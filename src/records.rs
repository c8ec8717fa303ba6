use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError, DefaultOnNull};

use crate::usd::Usd;

/// Defines the JSON format for one product in the catalogue.
///
/// Any fields besides `title` and `price` are ignored. An entry with no
/// `title` can never be matched by a sale. A `price` that is missing or not a
/// number reads as `None`.
#[serde_as]
#[derive(Debug, Deserialize, PartialEq)]
pub struct CatalogueEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub price: Option<Usd>,
}

/// Defines the JSON format for one sale.
///
/// A missing (or `null`) `Quantity` reads as zero.
#[serde_as]
#[derive(Debug, Deserialize, PartialEq)]
pub struct SaleRecord {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "Quantity", default)]
    pub quantity: f64,
}
