/// Single-line text input state: a value plus a character cursor.
///
/// Cursor positions are character indices, not byte offsets, so multi-byte
/// input never splits a code point.
#[derive(Debug, Clone, Default)]
pub struct Input {
    value: String,
    cursor: usize,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing value with the cursor at the end
    pub fn from_string(value: String) -> Self {
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, ch: char) {
        // Newlines have no place in a single-line field
        if ch == '\n' || ch == '\r' {
            return;
        }
        let mut chars: Vec<char> = self.value.chars().collect();
        let col = self.cursor.min(chars.len());
        chars.insert(col, ch);
        self.value = chars.into_iter().collect();
        self.cursor = col + 1;
    }

    /// Delete the character before the cursor (Backspace)
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut chars: Vec<char> = self.value.chars().collect();
        let col = self.cursor.min(chars.len());
        if col > 0 {
            chars.remove(col - 1);
            self.value = chars.into_iter().collect();
            self.cursor = col - 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Visible slice of the value for a viewport `width` columns wide, plus
    /// the cursor's column within that slice. Scrolls left just enough to
    /// keep the cursor in view when the value outgrows the field.
    pub fn display(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let offset = if self.cursor >= width {
            self.cursor - (width - 1)
        } else {
            0
        };
        let visible: String = self.value.chars().skip(offset).take(width).collect();
        (visible, self.cursor - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_delete_at_cursor() {
        let mut input = Input::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_cursor_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);

        input.delete_char();
        assert_eq!(input.value(), "ac");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn cursor_tracks_characters_not_bytes() {
        let mut input = Input::from_string("café".to_string());
        assert_eq!(input.cursor(), 4);
        input.delete_char();
        assert_eq!(input.value(), "caf");
        input.insert_char('é');
        input.insert_char('s');
        assert_eq!(input.value(), "cafés");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn newline_input_is_ignored() {
        let mut input = Input::from_string("one".to_string());
        input.insert_char('\n');
        assert_eq!(input.value(), "one");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn display_scrolls_to_keep_cursor_visible() {
        let input = Input::from_string("0123456789".to_string());
        let (visible, cursor_col) = input.display(5);
        assert_eq!(visible, "6789");
        assert_eq!(cursor_col, 4);

        let mut head = Input::from_string("0123456789".to_string());
        head.move_cursor_home();
        let (visible, cursor_col) = head.display(5);
        assert_eq!(visible, "01234");
        assert_eq!(cursor_col, 0);
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let mut input = Input::from_string("ab".to_string());
        input.move_cursor_right();
        assert_eq!(input.cursor(), 2);
        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor(), 0);
        input.move_cursor_end();
        assert_eq!(input.cursor(), 2);
    }
}
