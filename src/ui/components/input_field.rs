//! Single-line text input with a character-indexed cursor

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    buffer: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert(&mut self, c: char) {
        let pos = self.byte_pos(self.cursor);
        self.buffer.insert(pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let pos = self.byte_pos(self.cursor - 1);
            self.buffer.remove(pos);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let pos = self.byte_pos(self.cursor);
            self.buffer.remove(pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    /// Apply an editing key. Returns `false` when the key is not an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.chars().count(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multibyte_editing() {
        let mut field = InputField::with_text("café");
        assert_eq!(field.cursor(), 4);

        field.backspace();
        assert_eq!(field.text(), "caf");

        field.insert('é');
        field.move_left();
        field.move_left();
        field.insert('ñ');
        assert_eq!(field.text(), "cañfé");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut field = InputField::with_text("ab");
        field.delete();
        assert_eq!(field.text(), "ab");

        field.move_left();
        field.delete();
        assert_eq!(field.text(), "a");
    }

    #[test]
    fn test_blank_detection() {
        assert!(InputField::with_text("   ").is_blank());
        assert!(!InputField::with_text(" x ").is_blank());
    }
}
