/// Editor settings that can be customized via Rhai config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    // Display
    pub theme: String,
    pub show_line_numbers: bool,
    pub highlight_current_line: bool,
    pub caret_blink: bool,

    // Input
    pub mouse: bool,

    // (key, action name) in script order; an empty action removes the
    // default binding
    pub keybinds: Vec<(String, String)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_line_numbers: true,
            highlight_current_line: true,
            caret_blink: true,

            mouse: true,

            keybinds: Vec::new(),
        }
    }
}
