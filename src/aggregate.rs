use log::debug;
use serde::Deserialize;
use serde_json::Value;

use std::{collections::HashMap, io::Write};

use crate::{
    records::{CatalogueEntry, SaleRecord},
    usd::Usd,
};

/// Maps product titles to unit prices.
///
/// Built fresh from the catalogue for each run. If a title appears more than
/// once, the last entry wins.
#[derive(Debug, Default)]
pub struct PriceIndex(HashMap<String, Usd>);

impl PriceIndex {
    /// Builds the index from raw catalogue records.
    ///
    /// Records with no `title` are skipped silently. A record that is not a
    /// JSON object, or a titled record that cannot be used (title not a
    /// string, price missing or not a number), is skipped with one line
    /// written to `diagnostics`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `diagnostics`.
    pub fn from_catalogue(
        catalogue: &[Value],
        diagnostics: &mut impl Write,
    ) -> std::io::Result<Self> {
        let mut index = Self::default();
        for record in catalogue {
            if !record.is_object() {
                debug!("skipping catalogue record that is not an object: {record}");
                writeln!(diagnostics, "Error: entrada de catálogo inválida ({record}).")?;
                continue;
            }
            match CatalogueEntry::deserialize(record) {
                Ok(CatalogueEntry { title: None, .. }) => {}
                Ok(CatalogueEntry {
                    title: Some(title),
                    price: Some(price),
                }) => {
                    index.0.insert(title, price);
                }
                Ok(CatalogueEntry {
                    title: Some(title),
                    price: None,
                }) => {
                    debug!("skipping catalogue entry {title:?}: no usable price");
                    writeln!(
                        diagnostics,
                        "Error: Producto '{title}' sin precio válido en el catálogo."
                    )?;
                }
                Err(err) => {
                    debug!("skipping catalogue entry: {err}");
                    writeln!(diagnostics, "Error: entrada de catálogo inválida ({err}).")?;
                }
            }
        }
        debug!("price index holds {} products", index.len());
        Ok(index)
    }

    /// Returns the unit price of the product titled `title`, if any.
    #[must_use]
    pub fn price(&self, title: &str) -> Option<Usd> {
        self.0.get(title).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computes the total cost of `sales` at the prices listed in `catalogue`.
///
/// Each sale adds `price * quantity` for its product. A sale whose product is
/// not in the catalogue, or which cannot be read as a sale at all (including
/// anything that is not a JSON object), adds
/// nothing: one line is written to `diagnostics` and processing carries on
/// with the next sale.
///
/// # Errors
///
/// Returns any error from writing to `diagnostics`.
pub fn total_cost(
    catalogue: &[Value],
    sales: &[Value],
    diagnostics: &mut impl Write,
) -> std::io::Result<Usd> {
    let prices = PriceIndex::from_catalogue(catalogue, diagnostics)?;
    let mut total = Usd::default();
    let mut unmatched = 0;
    for record in sales {
        if !record.is_object() {
            debug!("skipping sale record that is not an object: {record}");
            writeln!(diagnostics, "Error: venta inválida ({record}).")?;
            continue;
        }
        let sale = match SaleRecord::deserialize(record) {
            Ok(sale) => sale,
            Err(err) => {
                debug!("skipping sale: {err}");
                writeln!(diagnostics, "Error: venta inválida ({err}).")?;
                continue;
            }
        };
        match prices.price(&sale.product) {
            Some(price) => total += price * sale.quantity,
            None => {
                unmatched += 1;
                writeln!(diagnostics, "Error: Producto '{}' no encontrado.", sale.product)?;
            }
        }
    }
    debug!("totalled {} sales, {unmatched} unmatched", sales.len());
    Ok(total)
}
