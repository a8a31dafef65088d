use unicode_width::UnicodeWidthChar;

use crate::editor::{CaretPosition, ClickTarget, Document, Side};

/// Screen geometry of the editor view: a line number gutter, one cell for
/// the line-start caret, then the glyphs. The last row is the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub gutter_width: u16,
}

/// Cells a character takes on screen. Control characters are drawn as a
/// single blank cell.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(1)
}

impl Layout {
    pub fn new(document: &Document, width: u16, height: u16, show_line_numbers: bool) -> Self {
        let gutter_width = if show_line_numbers {
            // One cell of margin on each side of the number
            document.line_count().to_string().len() as u16 + 2
        } else {
            0
        };
        Self {
            width,
            height,
            gutter_width,
        }
    }

    /// Rows available for text.
    pub fn text_height(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    pub fn status_row(&self) -> u16 {
        self.text_height()
    }

    /// Column of the line-start cell.
    pub fn text_origin(&self) -> u16 {
        self.gutter_width
    }

    /// First column of the first glyph.
    pub fn glyph_origin(&self) -> u16 {
        self.gutter_width + 1
    }

    /// Terminal cell the caret is drawn on, if it is on screen.
    pub fn caret_cell(&self, document: &Document, caret: CaretPosition) -> Option<(u16, u16)> {
        if caret.line >= self.text_height() as usize {
            return None;
        }
        let column = if caret.is_line_start() {
            self.text_origin() as usize
        } else {
            let offset: usize = document
                .line(caret.line)
                .chars()
                .take(caret.char as usize)
                .map(char_width)
                .sum();
            self.glyph_origin() as usize + offset
        };
        // Lines are not scrolled horizontally
        if column >= self.width as usize {
            return None;
        }
        Some((column as u16, caret.line as u16))
    }

    /// Map a clicked cell to a caret target. Clicks on the status line map
    /// to nothing; clicks below the document target its last line.
    pub fn hit_test(&self, document: &Document, column: u16, row: u16) -> Option<ClickTarget> {
        if row >= self.text_height() {
            return None;
        }
        let line = row as isize;
        if row as usize >= document.line_count() {
            return Some(ClickTarget::PastEnd { line });
        }
        if column <= self.text_origin() {
            return Some(ClickTarget::LineStart { line });
        }

        let x = (column - self.glyph_origin()) as usize;
        let mut start = 0usize;
        let len = document.line_len(row as usize);
        for (j, c) in document.line(row as usize).chars().take(len).enumerate() {
            let w = char_width(c);
            if w > 0 && x < start + w {
                // The last cell of a glyph is its right half
                let side = if x == start + w - 1 {
                    Side::Right
                } else {
                    Side::Left
                };
                return Some(ClickTarget::Glyph {
                    line,
                    char: j as isize,
                    side,
                });
            }
            start += w;
        }
        Some(ClickTarget::PastEnd { line })
    }
}
