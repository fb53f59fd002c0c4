//! Memo buffer: the text being typed plus any pasted images.
//!
//! Two variants exist:
//! - `Unbounded`: any amount of text, clipboard images allowed.
//! - `Capped`: text clamped to a character limit, images never stored.
//!
//! Lengths are counted in `char`s. The cursor is a char index into the text.
//! Every mutating method reports whether the buffer actually changed so the
//! caller can decide whether to rearm the idle timer.

mod pasted;
#[cfg(test)]
mod tests;

pub use pasted::PastedImage;

use crate::error::MemoError;

pub const DEFAULT_CHAR_LIMIT: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Unbounded,
    Capped(usize),
}

impl Variant {
    pub fn char_limit(self) -> Option<usize> {
        match self {
            Variant::Unbounded => None,
            Variant::Capped(limit) => Some(limit),
        }
    }

    pub fn accepts_images(self) -> bool {
        matches!(self, Variant::Unbounded)
    }
}

#[derive(Debug, Clone)]
pub struct MemoBuffer {
    variant: Variant,
    text: String,
    cursor: usize,
    images: Vec<PastedImage>,
}

impl MemoBuffer {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            text: String::new(),
            cursor: 0,
            images: Vec::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn images(&self) -> &[PastedImage] {
        &self.images
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when there is nothing to burn.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.images.is_empty()
    }

    /// Characters still accepted before the cap, `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        self.variant
            .char_limit()
            .map(|limit| limit.saturating_sub(self.char_count()))
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.remaining() == Some(0) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Insert pasted text at the cursor, truncated to the room left.
    ///
    /// Carriage returns from terminal pastes are folded into `\n`.
    pub fn insert_str(&mut self, input: &str) -> bool {
        let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
        let taken: String = match self.remaining() {
            Some(room) => normalized.chars().take(room).collect(),
            None => normalized,
        };
        if taken.is_empty() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &taken);
        self.cursor += taken.chars().count();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let before: Vec<char> = self.text.chars().take(self.cursor).collect();
        let line_start = before
            .iter()
            .rposition(|ch| *ch == '\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.cursor = line_start;
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let rest = self
            .text
            .chars()
            .skip(self.cursor)
            .take_while(|ch| *ch != '\n')
            .count();
        self.cursor += rest;
    }

    pub fn push_image(&mut self, image: PastedImage) -> Result<(), MemoError> {
        if !self.variant.accepts_images() {
            return Err(MemoError::ImagesDisabled);
        }
        self.images.push(image);
        Ok(())
    }

    pub fn pop_image(&mut self) -> Option<PastedImage> {
        self.images.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.images.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}
