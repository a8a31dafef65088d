use super::{CaretModel, CaretPosition, ClickTarget, Document};

/// Lines shown when no document is given on the command line.
pub const SAMPLE_LINES: [&str; 3] = [
    "asdasda as da  ",
    "gsdg 8124 sadf7 ",
    "   asd 9a k k g gg 71",
];

pub struct Editor {
    pub caret: CaretModel,
    pub running: bool,
    pub message: Option<String>,
}

impl Editor {
    pub fn new(document: Document) -> Self {
        Self {
            caret: CaretModel::new(document),
            running: true,
            message: None,
        }
    }

    pub fn sample() -> Self {
        Self::new(Document::from_lines(SAMPLE_LINES))
    }

    pub fn document(&self) -> &Document {
        self.caret.document()
    }

    pub fn position(&self) -> CaretPosition {
        self.caret.position()
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Run a caret operation and report whether the caret moved.
    fn update(&mut self, op: impl FnOnce(&mut CaretModel) -> CaretPosition) -> bool {
        let before = self.caret.position();
        let after = op(&mut self.caret);
        if before != after {
            tracing::trace!(line = after.line, char = after.char, "caret moved");
        }
        before != after
    }

    pub fn move_left(&mut self) -> bool {
        self.update(CaretModel::move_left)
    }

    pub fn move_right(&mut self) -> bool {
        self.update(CaretModel::move_right)
    }

    pub fn move_up(&mut self) -> bool {
        self.update(CaretModel::move_up)
    }

    pub fn move_down(&mut self) -> bool {
        self.update(CaretModel::move_down)
    }

    pub fn click(&mut self, target: ClickTarget) -> bool {
        tracing::debug!(?target, "click");
        self.update(|caret| caret.click(target))
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
