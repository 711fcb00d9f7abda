//! Multi-line input buffer holding the text to summarize.

/// Text the buffer starts with: three short emails.
pub const EXAMPLE_TEXT: &str = "From: john@example.com
Subject: Meeting tomorrow
Don't forget about our meeting at 10 AM. We need to discuss the project timeline.

From: jane@example.com
Subject: Project update
Here's the latest status on the project. Everything is on track for the Q4 release.

From: mike@example.com
Subject: Budget approval needed
Please review and approve the budget proposal I sent yesterday.";

/// Editable text plus a cursor.
///
/// Any string is accepted, including an empty one. The cursor is a byte
/// offset that always sits on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    /// Buffer pre-populated with [`EXAMPLE_TEXT`].
    pub fn new() -> Self {
        Self::with_text(EXAMPLE_TEXT)
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text. The cursor moves to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text at the cursor. Line endings are normalised to `\n`.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    /// Remove the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_end(&mut self) {
        self.cursor += self.text[self.cursor..]
            .find('\n')
            .unwrap_or(self.text.len() - self.cursor);
    }

    pub fn move_up(&mut self) {
        let (line, column) = self.cursor_position();
        if line == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.offset_at(line - 1, column);
        }
    }

    pub fn move_down(&mut self) {
        let (line, column) = self.cursor_position();
        if line + 1 >= self.line_count() {
            self.cursor = self.text.len();
        } else {
            self.cursor = self.offset_at(line + 1, column);
        }
    }

    /// Cursor as (line, column), both zero-based, column counted in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start(self.cursor)..].chars().count();
        (line, column)
    }

    /// Text of the cursor's line up to the cursor.
    pub fn line_before_cursor(&self) -> &str {
        &self.text[self.line_start(self.cursor)..self.cursor]
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map(|idx| idx + 1).unwrap_or(0)
    }

    /// Byte offset of `column` on `line`, clamped to the line's end.
    fn offset_at(&self, line: usize, column: usize) -> usize {
        let mut start = 0;
        for (idx, content) in self.text.split('\n').enumerate() {
            if idx == line {
                let within = content
                    .char_indices()
                    .nth(column)
                    .map(|(byte, _)| byte)
                    .unwrap_or(content.len());
                return start + within;
            }
            start += content.len() + 1;
        }
        self.text.len()
    }
}
