//! Static catalog tables and their lookup-with-default accessors
//!
//! Both tables are built once per process and never mutated. A title missing
//! from a table is not an error: the accessors hand back the declared
//! placeholder or fallback detail, so callers never branch on presence.

mod tables;

use crate::types::BookDetail;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Image shown when a title has no cover entry
pub const PLACEHOLDER_IMAGE: &str = "URL_PADRAO";

static COVER_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| tables::COVERS.iter().copied().collect());

static DETAIL_TABLE: Lazy<HashMap<&'static str, BookDetail>> =
    Lazy::new(|| tables::DETAILS.iter().copied().collect());

/// Cover image URL for a title, or the placeholder
pub fn cover_image(title: &str) -> &'static str {
    match COVER_TABLE.get(title) {
        Some(url) => *url,
        None => {
            tracing::trace!(title, "No cover image for title, using placeholder");
            PLACEHOLDER_IMAGE
        }
    }
}

/// Detail for a title, or the fallback detail
pub fn book_detail(title: &str) -> BookDetail {
    match DETAIL_TABLE.get(title) {
        Some(detail) => *detail,
        None => {
            tracing::trace!(title, "No detail entry for title, using fallback");
            BookDetail::FALLBACK
        }
    }
}

/// Titles with a compiled-in detail entry, in table order
pub fn known_titles() -> impl Iterator<Item = &'static str> {
    tables::DETAILS.iter().map(|(title, _)| *title)
}
