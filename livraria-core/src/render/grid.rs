//! Fixed 3-column text grid

use super::{CatalogCard, HEADER};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cards per grid row
pub const GRID_COLUMNS: usize = 3;

/// Grid width used when none is configured
pub const DEFAULT_WIDTH: usize = 120;

/// Narrowest grid that still fits a few characters per column
pub const MIN_WIDTH: usize = 30;

const GUTTER: &str = "  ";

/// Width settings for the text grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    width: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl GridLayout {
    /// Layout for a total width in terminal columns, clamped to `MIN_WIDTH`
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Width of one card column
    pub fn column_width(&self) -> usize {
        (self.width - GUTTER.len() * (GRID_COLUMNS - 1)) / GRID_COLUMNS
    }

    /// Lines of one card, wrapped to the column width
    pub fn card_lines(&self, card: &CatalogCard) -> Vec<String> {
        let width = self.column_width();
        let mut lines = Vec::new();
        lines.extend(wrap(&card.title, width));
        lines.extend(wrap(&format!("Capa: {}", card.image), width));
        lines.extend(wrap(card.price, width));
        lines.extend(wrap(card.category, width));
        lines.extend(wrap(&format!("Avaliação: {}", card.rating), width));
        lines.extend(wrap(card.synopsis, width));
        lines
    }

    /// Render the header followed by the cards, three per row, in order
    pub fn render(&self, cards: &[CatalogCard]) -> String {
        let mut out = String::new();
        let indent = self.width.saturating_sub(HEADER.width()) / 2;
        out.push_str(&" ".repeat(indent));
        out.push_str(HEADER);
        out.push('\n');

        let column_width = self.column_width();
        let divider = "-".repeat(self.width);

        for row in cards.chunks(GRID_COLUMNS) {
            out.push_str(&divider);
            out.push('\n');

            let blocks: Vec<Vec<String>> = row.iter().map(|card| self.card_lines(card)).collect();
            let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

            for i in 0..height {
                let mut line = String::new();
                for (col, block) in blocks.iter().enumerate() {
                    if col > 0 {
                        line.push_str(GUTTER);
                    }
                    let cell = block.get(i).map(String::as_str).unwrap_or("");
                    line.push_str(cell);
                    line.push_str(&" ".repeat(column_width.saturating_sub(cell.width())));
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }

        if !cards.is_empty() {
            out.push_str(&divider);
            out.push('\n');
        }

        out
    }
}

/// Greedy word wrap; words longer than the width are split
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in split_word(word, width) {
            let piece_width = piece.width();
            if !current.is_empty() && current_width + 1 + piece_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&piece);
            current_width += piece_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if !piece.is_empty() && piece_width + char_width > width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += char_width;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
