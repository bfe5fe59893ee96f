//! Pending-input draft state with a unicode-aware cursor.

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

/// The text being typed into the entry field, plus a cursor measured in
/// chars (not bytes).
#[derive(Debug, Default)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Take the draft text, resetting the cursor.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let moved = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(moved);
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let current = self.cursor;
        let before = self.text.chars().take(current - 1);
        let after = self.text.chars().skip(current);
        self.text = before.chain(after).collect();
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        let current = self.cursor;
        if current >= self.text.chars().count() {
            return;
        }

        let before = self.text.chars().take(current);
        let after = self.text.chars().skip(current + 1);
        self.text = before.chain(after).collect();
    }

    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 {
            let ch = self.text.chars().nth(self.cursor - 1);
            if ch.is_some_and(char::is_whitespace) {
                self.delete_char();
            } else {
                break;
            }
        }

        while self.cursor > 0 {
            let ch = self.text.chars().nth(self.cursor - 1);
            if ch.is_some_and(|c| !c.is_whitespace()) {
                self.delete_char();
            } else {
                break;
            }
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len())
    }

    fn clamp_cursor(&self, new_cursor: usize) -> usize {
        new_cursor.clamp(0, self.text.chars().count())
    }
}
