//! Expression editing buffer
//!
//! Models the input field of an interactive front end: the current text and
//! a cursor, with palette symbols inserted at the cursor. Cursor positions
//! count characters, not bytes.

use crate::data::PALETTE;

/// Text being typed plus a cursor position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
    cursor: usize,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at its end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the end of the text
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.chars().count());
    }

    /// Insert `symbol` at the cursor and move the cursor past it
    pub fn insert(&mut self, symbol: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, symbol);
        self.cursor += symbol.chars().count();
    }

    /// Insert the palette entry at `index`; returns false if there is none
    pub fn insert_palette(&mut self, index: usize) -> bool {
        match PALETTE.get(index) {
            Some(symbol) => {
                self.insert(symbol);
                true
            }
            None => false,
        }
    }

    /// Nothing worth rendering has been typed
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
