use super::Document;

/// Char index meaning "before the first character of the line".
pub const LINE_START: isize = -1;

/// Caret location. `char` is the index of the character the caret sits
/// after, or [`LINE_START`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaretPosition {
    pub line: usize,
    pub char: isize,
}

impl CaretPosition {
    pub const fn new(line: usize, char: isize) -> Self {
        Self { line, char }
    }

    pub fn is_line_start(&self) -> bool {
        self.char == LINE_START
    }
}

impl Default for CaretPosition {
    fn default() -> Self {
        Self::new(0, LINE_START)
    }
}

/// Which half of a glyph a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Where a pointer click landed, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// On a glyph, with the half that was hit
    Glyph { line: isize, char: isize, side: Side },
    /// Before the first glyph (line-start cell or line number)
    LineStart { line: isize },
    /// Beyond the last glyph
    PastEnd { line: isize },
}

/// Owns the document and the single caret into it.
///
/// Every operation clamps its input, so the caret is always valid and every
/// call returns the resulting position.
#[derive(Debug, Clone)]
pub struct CaretModel {
    document: Document,
    position: CaretPosition,
}

impl CaretModel {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            position: CaretPosition::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn position(&self) -> CaretPosition {
        self.position
    }

    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    fn last_index(&self, line: usize) -> isize {
        self.document.line_len(line) as isize - 1
    }

    /// Clamp `value` to `[-1, len(line) - 1]`.
    pub fn clamp_char(&self, value: isize, line: usize) -> isize {
        value.clamp(LINE_START, self.last_index(line))
    }

    /// Clamp `value` to `[0, line_count - 1]`.
    pub fn clamp_line(&self, value: isize) -> usize {
        let last = self.line_count() as isize - 1;
        value.clamp(0, last) as usize
    }

    pub fn set_char(&mut self, value: isize) -> CaretPosition {
        self.position.char = self.clamp_char(value, self.position.line);
        self.position
    }

    /// Move to another line, keeping the column where the new line allows.
    /// Targeting the current line leaves the caret untouched.
    pub fn set_line(&mut self, value: isize) -> CaretPosition {
        let line = self.clamp_line(value);
        if line == self.position.line {
            return self.position;
        }
        self.position = CaretPosition::new(line, self.clamp_char(self.position.char, line));
        self.position
    }

    pub fn move_left(&mut self) -> CaretPosition {
        let CaretPosition { line, char } = self.position;
        if char > LINE_START {
            return self.set_char(char - 1);
        }
        if line == 0 {
            return self.position;
        }
        // Wrap to the end of the previous line
        let prev = line - 1;
        self.position = CaretPosition::new(prev, self.last_index(prev));
        self.position
    }

    pub fn move_right(&mut self) -> CaretPosition {
        let CaretPosition { line, char } = self.position;
        if char < self.last_index(line) {
            return self.set_char(char + 1);
        }
        if line + 1 >= self.line_count() {
            return self.position;
        }
        self.position = CaretPosition::new(line + 1, LINE_START);
        self.position
    }

    pub fn move_up(&mut self) -> CaretPosition {
        self.set_line(self.position.line as isize - 1)
    }

    pub fn move_down(&mut self) -> CaretPosition {
        self.set_line(self.position.line as isize + 1)
    }

    /// Place the caret on a clicked glyph: after it for a right-half click,
    /// before it for a left-half click.
    pub fn set_from_click(&mut self, line: isize, char: isize, side: Side) -> CaretPosition {
        let line = self.clamp_line(line);
        let char = match side {
            Side::Left => char.saturating_sub(1),
            Side::Right => char,
        };
        self.position = CaretPosition::new(line, self.clamp_char(char, line));
        self.position
    }

    /// Click beyond the last glyph of a line: end of that line.
    pub fn set_line_end(&mut self, line: isize) -> CaretPosition {
        let line = self.clamp_line(line);
        self.position = CaretPosition::new(line, self.last_index(line));
        self.position
    }

    /// Click before the first glyph of a line: line start.
    pub fn set_line_start(&mut self, line: isize) -> CaretPosition {
        let line = self.clamp_line(line);
        self.position = CaretPosition::new(line, LINE_START);
        self.position
    }

    pub fn click(&mut self, target: ClickTarget) -> CaretPosition {
        match target {
            ClickTarget::Glyph { line, char, side } => self.set_from_click(line, char, side),
            ClickTarget::LineStart { line } => self.set_line_start(line),
            ClickTarget::PastEnd { line } => self.set_line_end(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn model(lines: &[&str]) -> CaretModel {
        CaretModel::new(Document::from_lines(lines.iter().copied()))
    }

    fn at(line: usize, char: isize) -> CaretPosition {
        CaretPosition::new(line, char)
    }

    #[test]
    fn new_model_starts_before_first_char() {
        let m = model(&["abc"]);
        assert_eq!(m.position(), at(0, -1));
    }

    #[test]
    fn empty_document_is_normalized() {
        let mut m = CaretModel::new(Document::from_lines(Vec::<&str>::new()));
        assert_eq!(m.line_count(), 1);
        m.move_right();
        m.move_down();
        assert_eq!(m.position(), at(0, -1));
    }

    #[test]
    fn clamp_char_bounds() {
        let m = model(&["abc", ""]);
        assert_eq!(m.clamp_char(-5, 0), -1);
        assert_eq!(m.clamp_char(1, 0), 1);
        assert_eq!(m.clamp_char(99, 0), 2);
        assert_eq!(m.clamp_char(3, 1), -1);
    }

    #[test]
    fn clamp_line_bounds() {
        let m = model(&["a", "b", "c"]);
        assert_eq!(m.clamp_line(-1), 0);
        assert_eq!(m.clamp_line(1), 1);
        assert_eq!(m.clamp_line(10), 2);
    }

    #[test]
    fn set_char_keeps_line() {
        let mut m = model(&["abc", "de"]);
        m.move_down();
        assert_eq!(m.set_char(10), at(1, 1));
    }

    #[test]
    fn set_line_to_current_line_keeps_char() {
        let mut m = model(&["abcdef", "xy"]);
        m.set_char(4);
        assert_eq!(m.set_line(0), at(0, 4));
        assert_eq!(m.set_line(-3), at(0, 4));
    }

    #[test]
    fn set_line_reclamps_char() {
        let mut m = model(&["abcdef", "xy"]);
        m.set_char(4);
        assert_eq!(m.set_line(1), at(1, 1));
    }

    #[test]
    fn move_right_walks_across_lines() {
        let mut m = model(&["ab", "", "xyz"]);
        assert_eq!(m.move_right(), at(0, 0));
        assert_eq!(m.move_right(), at(0, 1));
        assert_eq!(m.move_right(), at(1, -1));
        assert_eq!(m.move_right(), at(2, -1));
        assert_eq!(m.move_right(), at(2, 0));
    }

    #[test]
    fn move_right_stops_at_document_end() {
        let mut m = model(&["ab", "xyz"]);
        for _ in 0..10 {
            m.move_right();
        }
        assert_eq!(m.position(), at(1, 2));
        assert_eq!(m.move_right(), at(1, 2));
    }

    #[test]
    fn move_left_wraps_to_previous_line_end() {
        let mut m = model(&["ab", "", "xyz"]);
        m.set_line(2);
        assert_eq!(m.move_left(), at(1, -1));
        assert_eq!(m.move_left(), at(0, 1));
        assert_eq!(m.move_left(), at(0, 0));
        assert_eq!(m.move_left(), at(0, -1));
    }

    #[test]
    fn move_left_at_document_start_is_noop() {
        let mut m = model(&["ab", "cd"]);
        assert_eq!(m.move_left(), at(0, -1));
        assert_eq!(m.move_left(), at(0, -1));
    }

    #[test]
    fn move_up_and_down_clamp() {
        let mut m = model(&["a", "b"]);
        assert_eq!(m.move_up(), at(0, -1));
        assert_eq!(m.move_down(), at(1, -1));
        assert_eq!(m.move_down(), at(1, -1));
    }

    #[test]
    fn down_then_up_returns_to_line() {
        let mut m = model(&["abcdef", "x", "abcdef"]);
        m.set_char(5);
        m.move_down();
        assert_eq!(m.position(), at(1, 0));
        assert_eq!(m.move_up(), at(0, 0));
    }

    #[test]
    fn click_side_selects_caret() {
        let mut m = model(&["ab", "", "xyz"]);
        assert_eq!(m.set_from_click(2, 1, Side::Left), at(2, 0));
        assert_eq!(m.set_from_click(2, 1, Side::Right), at(2, 1));
    }

    #[test]
    fn click_is_clamped() {
        let mut m = model(&["ab", "", "xyz"]);
        assert_eq!(m.set_from_click(1, 4, Side::Right), at(1, -1));
        assert_eq!(m.set_from_click(9, 9, Side::Right), at(2, 2));
        assert_eq!(m.set_from_click(-2, 0, Side::Left), at(0, -1));
    }

    #[test]
    fn click_past_line_end_goes_to_that_line_end() {
        let mut m = model(&["ab", "", "xyz"]);
        assert_eq!(m.set_line_end(0), at(0, 1));
        assert_eq!(m.set_line_end(1), at(1, -1));
        assert_eq!(m.set_line_start(2), at(2, -1));
    }

    #[test]
    fn click_dispatches_on_target() {
        let mut m = model(&["ab", "xyz"]);
        let glyph = ClickTarget::Glyph {
            line: 1,
            char: 2,
            side: Side::Left,
        };
        assert_eq!(m.click(glyph), at(1, 1));
        assert_eq!(m.click(ClickTarget::PastEnd { line: 0 }), at(0, 1));
        assert_eq!(m.click(ClickTarget::LineStart { line: 1 }), at(1, -1));
    }

    fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z ]{0,8}", 0..6)
    }

    #[derive(Debug, Clone, Copy)]
    enum Move {
        Left,
        Right,
        Up,
        Down,
    }

    fn move_strategy() -> impl Strategy<Value = Move> {
        prop_oneof![
            Just(Move::Left),
            Just(Move::Right),
            Just(Move::Up),
            Just(Move::Down),
        ]
    }

    proptest! {
        #[test]
        fn moves_never_leave_bounds(
            lines in lines_strategy(),
            moves in prop::collection::vec(move_strategy(), 0..64),
        ) {
            let mut m = CaretModel::new(Document::from_lines(&lines));
            for mv in moves {
                let pos = match mv {
                    Move::Left => m.move_left(),
                    Move::Right => m.move_right(),
                    Move::Up => m.move_up(),
                    Move::Down => m.move_down(),
                };
                prop_assert!(pos.line < m.line_count());
                let len = m.document().line_len(pos.line) as isize;
                prop_assert!(pos.char >= -1 && pos.char <= len - 1);
            }
        }

        #[test]
        fn clicks_never_leave_bounds(
            lines in lines_strategy(),
            line in -3isize..10,
            column in -3isize..12,
            left in any::<bool>(),
        ) {
            let mut m = CaretModel::new(Document::from_lines(&lines));
            let side = if left { Side::Left } else { Side::Right };
            let pos = m.set_from_click(line, column, side);
            prop_assert!(pos.line < m.line_count());
            let len = m.document().line_len(pos.line) as isize;
            prop_assert!(pos.char >= -1 && pos.char <= len - 1);
        }
    }
}
