//! Mapping fetched records to display cards

use crate::catalog;
use crate::types::BookRecord;
use serde::Serialize;

/// One fully populated catalog card
///
/// Every field is always present: a join miss puts the declared placeholder
/// or fallback text in its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogCard {
    /// Identity key, taken from the record id
    pub key: String,
    pub title: String,
    pub image: &'static str,
    pub price: &'static str,
    pub category: &'static str,
    pub rating: String,
    pub synopsis: &'static str,
}

impl CatalogCard {
    pub fn from_record(record: &BookRecord) -> Self {
        let detail = catalog::book_detail(&record.title);
        Self {
            key: record.id.to_string(),
            title: record.title.clone(),
            image: catalog::cover_image(&record.title),
            price: detail.price,
            category: detail.category,
            rating: detail.rating.to_string(),
            synopsis: detail.synopsis,
        }
    }
}

/// Build one card per record, keeping the fetch order
pub fn map_cards(records: &[BookRecord]) -> Vec<CatalogCard> {
    records.iter().map(CatalogCard::from_record).collect()
}
