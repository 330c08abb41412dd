//! Core types for the Livraria catalog

mod detail;
mod record;

pub use detail::{BookDetail, Rating};
pub use record::{decode_records, BookId, BookRecord};
