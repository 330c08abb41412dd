//! Presentation mapper and text renderer for the catalog view

mod card;
mod grid;

pub use card::{map_cards, CatalogCard};
pub use grid::{GridLayout, DEFAULT_WIDTH, GRID_COLUMNS, MIN_WIDTH};

use crate::view::ViewState;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Title shown above the grid
pub const HEADER: &str = "Livraria do Harry Potter";

/// Text shown while the view is loading
pub const LOADING_TEXT: &str = "Carregando...";

/// What to draw for a view state
///
/// Exactly one screen per state: a spinner while loading, the message alone
/// on error, the card grid when ready.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Spinner,
    Error(String),
    Grid(Vec<CatalogCard>),
}

impl Screen {
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Loading => Screen::Spinner,
            ViewState::Error(message) => Screen::Error(message.clone()),
            ViewState::Ready(records) => Screen::Grid(map_cards(records)),
        }
    }

    /// Render as plain text with the given layout
    pub fn to_text(&self, layout: &GridLayout) -> String {
        match self {
            Screen::Spinner => format!("{}\n", LOADING_TEXT),
            Screen::Error(message) => format!("Error: {}\n", message),
            Screen::Grid(cards) => layout.render(cards),
        }
    }
}

/// JSON form of a screen: `{"status": "loading"}`, `{"error": ...}`, or
/// `{"title": ..., "books": [...]}`
impl Serialize for Screen {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Screen::Spinner => map.serialize_entry("status", "loading")?,
            Screen::Error(message) => map.serialize_entry("error", message)?,
            Screen::Grid(cards) => {
                map.serialize_entry("title", HEADER)?;
                map.serialize_entry("books", cards)?;
            }
        }
        map.end()
    }
}
