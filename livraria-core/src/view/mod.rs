//! The catalog view: its state machine and mount lifecycle

mod catalog;
mod state;

pub use catalog::CatalogView;
pub use state::ViewState;
