//! Livraria Core Library
//!
//! This crate provides the catalog view behind the Livraria book store screen:
//! a single fetch of book records, a Loading/Error/Ready state machine, and the
//! presentation mapper that joins each record against the compiled-in cover and
//! detail tables before laying the cards out in a 3-column grid.

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod render;
pub mod types;
pub mod view;

pub use error::{FetchError, FetchResult, LivrariaError, Result};
pub use fetch::{BookSource, HttpBookSource};
pub use render::{CatalogCard, GridLayout, Screen};
pub use types::{BookDetail, BookId, BookRecord, Rating};
pub use view::{CatalogView, ViewState};
