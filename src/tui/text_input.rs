use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maximum number of characters a task text may hold
pub const CHAR_LIMIT: usize = 140;

/// Single-line text field with a cursor.
///
/// The cursor is a character index, so multi-byte input is safe.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the content and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(CHAR_LIMIT).collect();
        self.cursor = self.char_len();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before and after the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_offset(self.cursor))
    }

    /// Apply an editing key. Ignored while unfocused.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.focused {
            return;
        }
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left if alt => self.cursor = self.word_boundary_left(),
            KeyCode::Right if alt => self.cursor = self.word_boundary_right(),
            // macOS: Option+Left/Right sends Alt+b / Alt+f
            KeyCode::Char('b') if alt => self.cursor = self.word_boundary_left(),
            KeyCode::Char('f') if alt => self.cursor = self.word_boundary_right(),
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.char_len(),
            KeyCode::Char('u') if ctrl => {
                let end = self.byte_offset(self.cursor);
                self.value.replace_range(..end, "");
                self.cursor = 0;
            }
            KeyCode::Char('w') if ctrl => {
                let start = self.word_boundary_left();
                let range = self.byte_offset(start)..self.byte_offset(self.cursor);
                self.value.replace_range(range, "");
                self.cursor = start;
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if self.char_len() < CHAR_LIMIT {
                    let at = self.byte_offset(self.cursor);
                    self.value.insert(at, c);
                    self.cursor += 1;
                }
            }
            _ => {}
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Start of the word before the cursor
    fn word_boundary_left(&self) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut i = self.cursor.min(chars.len());
        // Skip whitespace/punctuation
        while i > 0 && !chars[i - 1].is_alphanumeric() {
            i -= 1;
        }
        // Skip word characters
        while i > 0 && chars[i - 1].is_alphanumeric() {
            i -= 1;
        }
        i
    }

    /// Start of the next word after the cursor
    fn word_boundary_right(&self) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let len = chars.len();
        let mut i = self.cursor.min(len);
        while i < len && chars[i].is_alphanumeric() {
            i += 1;
        }
        while i < len && !chars[i].is_alphanumeric() {
            i += 1;
        }
        i
    }
}
