//! Descriptive metadata joined onto a record by title

use std::fmt;

/// Price shown when a title has no detail entry
pub const FALLBACK_PRICE: &str = "Preço não disponível";

/// Category shown when a title has no detail entry
pub const FALLBACK_CATEGORY: &str = "Categoria não disponível";

/// Rating text shown when a title has no detail entry
pub const FALLBACK_RATING: &str = "Não avaliado";

/// Synopsis shown when a title has no detail entry
pub const FALLBACK_SYNOPSIS: &str = "Sinopse não disponível";

/// Reader rating of a book
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rating {
    /// Average score out of 5
    Score(f32),

    /// No rating on record
    #[default]
    Unrated,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::Unrated => f.write_str(FALLBACK_RATING),
        }
    }
}

/// Price, category, rating and synopsis of a title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookDetail {
    pub price: &'static str,
    pub category: &'static str,
    pub rating: Rating,
    pub synopsis: &'static str,
}

impl BookDetail {
    /// Detail used for every title missing from the detail table
    pub const FALLBACK: BookDetail = BookDetail {
        price: FALLBACK_PRICE,
        category: FALLBACK_CATEGORY,
        rating: Rating::Unrated,
        synopsis: FALLBACK_SYNOPSIS,
    };

    pub const fn new(
        price: &'static str,
        category: &'static str,
        rating: f32,
        synopsis: &'static str,
    ) -> Self {
        Self {
            price,
            category,
            rating: Rating::Score(rating),
            synopsis,
        }
    }
}

impl Default for BookDetail {
    fn default() -> Self {
        Self::FALLBACK
    }
}
