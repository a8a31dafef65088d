use ropey::{Rope, RopeSlice};

/// Immutable text shown by the editor.
///
/// Always holds at least one line: an empty rope still reports a single
/// (empty) line, which is how a zero-line document gets normalized.
#[derive(Debug, Clone)]
pub struct Document {
    text: Rope,
}

impl Document {
    /// Build a document from separate lines. Line breaks inside an entry
    /// split it into further lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                joined.push('\n');
            }
            let line = line.as_ref();
            joined.push_str(line);
            // A bare '\r' would fuse with the separator into one "\r\n"
            if line.ends_with('\r') {
                joined.push('\n');
            }
        }
        Self::from_text(&joined)
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            text: Rope::from_str(s),
        }
    }

    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    pub fn line(&self, idx: usize) -> RopeSlice<'_> {
        self.text.line(idx)
    }

    /// Line content without its terminator.
    pub fn line_text(&self, idx: usize) -> String {
        let len = self.line_len(idx);
        self.text.line(idx).chars().take(len).collect()
    }

    pub fn line_len(&self, idx: usize) -> usize {
        // Length excluding the terminator, "\r\n" counting as one
        let line = self.text.line(idx);
        let mut len = line.len_chars();
        if len == 0 {
            return 0;
        }
        let last = line.char(len - 1);
        if is_line_break(last) {
            len -= 1;
            if last == '\n' && len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }
}

/// Characters ropey splits lines on.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
