use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::keymap::{Action, Key, Keymap};
use crate::editor::Editor;
use crate::render::Layout;

/// Apply one terminal event. Returns true when the screen needs redrawing.
pub fn handle_event(
    editor: &mut Editor,
    keymap: &Keymap,
    layout: &Layout,
    event: Event,
) -> bool {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return false;
            }
            // Clear any message on keypress
            let had_message = editor.message.is_some();
            editor.clear_message();
            handle_key(editor, keymap, key) || had_message
        }
        Event::Mouse(mouse) => handle_mouse(editor, layout, mouse),
        Event::Resize(_, _) => true,
        _ => false,
    }
}

fn handle_key(editor: &mut Editor, keymap: &Keymap, key: KeyEvent) -> bool {
    match keymap.lookup(Key::from(key)) {
        Some(action) => apply_action(editor, action),
        None => false,
    }
}

fn apply_action(editor: &mut Editor, action: Action) -> bool {
    match action {
        Action::MoveLeft => editor.move_left(),
        Action::MoveRight => editor.move_right(),
        Action::MoveUp => editor.move_up(),
        Action::MoveDown => editor.move_down(),
        Action::Quit => {
            editor.quit();
            false
        }
    }
}

fn handle_mouse(editor: &mut Editor, layout: &Layout, mouse: MouseEvent) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    match layout.hit_test(editor.document(), mouse.column, mouse.row) {
        Some(target) => editor.click(target),
        None => false,
    }
}
