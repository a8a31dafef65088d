mod caret;
mod document;
mod editor;

pub use caret::{CaretModel, CaretPosition, ClickTarget, Side};
pub use document::Document;
pub use editor::Editor;
