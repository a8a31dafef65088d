use std::io::{self, Write, stdout};

use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use super::layout::{Layout, char_width};
use crate::config::Settings;
use crate::editor::Editor;
use crate::theme::Theme;

pub struct Renderer {
    pub width: u16,
    pub height: u16,
}

impl Renderer {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self { width, height })
    }

    /// Put the terminal in editor mode. A failure part way through
    /// restores whatever was already changed.
    pub fn setup(mouse: bool) -> io::Result<()> {
        restore_on_error(|| Self::enter(mouse), || Self::teardown(mouse))
    }

    fn enter(mouse: bool) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All)
        )?;
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        Ok(())
    }

    pub fn teardown(mouse: bool) -> io::Result<()> {
        if mouse {
            execute!(stdout(), DisableMouseCapture)?;
        }
        execute!(
            stdout(),
            SetCursorStyle::DefaultUserShape,
            Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn layout(&self, editor: &Editor, settings: &Settings) -> Layout {
        Layout::new(
            editor.document(),
            self.width,
            self.height,
            settings.show_line_numbers,
        )
    }

    pub fn render(
        &self,
        editor: &Editor,
        layout: &Layout,
        theme: &Theme,
        settings: &Settings,
    ) -> io::Result<()> {
        let mut stdout = stdout();

        // Hide cursor during redraw to prevent flicker
        queue!(stdout, Hide)?;

        self.render_lines(&mut stdout, editor, layout, theme, settings)?;
        self.render_status_line(&mut stdout, editor, layout, theme)?;
        self.position_caret(&mut stdout, editor, layout, settings)?;

        stdout.flush()?;
        Ok(())
    }

    fn render_lines(
        &self,
        stdout: &mut impl Write,
        editor: &Editor,
        layout: &Layout,
        theme: &Theme,
        settings: &Settings,
    ) -> io::Result<()> {
        let document = editor.document();
        let caret = editor.position();
        let line_count = document.line_count();

        for row in 0..layout.text_height() {
            let line_idx = row as usize;
            queue!(stdout, MoveTo(0, row))?;

            if line_idx >= line_count {
                queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;
                queue!(stdout, Print(" ".repeat(layout.width as usize)))?;
                continue;
            }

            let is_caret_line = line_idx == caret.line;

            // Line number
            if layout.gutter_width > 0 {
                let number_color = if is_caret_line {
                    theme.line_number_active
                } else {
                    theme.line_number
                };
                let digits = (layout.gutter_width - 2) as usize;
                let number: String = format!(" {:>digits$} ", line_idx + 1)
                    .chars()
                    .take(layout.width as usize)
                    .collect();
                queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;
                queue!(stdout, SetForegroundColor(number_color.to_crossterm()))?;
                queue!(stdout, Print(number))?;
            }

            let line_bg = if is_caret_line && settings.highlight_current_line {
                theme.line_highlight
            } else {
                theme.background
            };
            queue!(stdout, SetBackgroundColor(line_bg.to_crossterm()))?;
            queue!(stdout, SetForegroundColor(theme.foreground.to_crossterm()))?;

            // Line-start cell, then the glyphs. The cell under the caret
            // gets the caret color.
            let caret_char = if is_caret_line { Some(caret.char) } else { None };
            let mut x = layout.text_origin();
            if x < layout.width {
                self.print_cell(stdout, ' ', caret_char == Some(-1), theme)?;
                x += 1;
            }
            let text = document.line_text(line_idx);
            for (j, c) in text.chars().enumerate() {
                // At most two cells
                let w = char_width(c) as u16;
                if x + w > layout.width {
                    break;
                }
                let glyph = if c.is_control() { ' ' } else { c };
                self.print_cell(stdout, glyph, caret_char == Some(j as isize), theme)?;
                x += w;
            }

            if x < layout.width {
                queue!(stdout, Print(" ".repeat((layout.width - x) as usize)))?;
            }
        }

        Ok(())
    }

    fn print_cell(
        &self,
        stdout: &mut impl Write,
        glyph: char,
        has_caret: bool,
        theme: &Theme,
    ) -> io::Result<()> {
        if !has_caret {
            queue!(stdout, Print(glyph))?;
            return Ok(());
        }
        queue!(
            stdout,
            SetForegroundColor(theme.caret.to_crossterm()),
            SetAttribute(Attribute::Bold),
            Print(glyph),
            SetAttribute(Attribute::NormalIntensity),
            SetForegroundColor(theme.foreground.to_crossterm())
        )?;
        Ok(())
    }

    fn render_status_line(
        &self,
        stdout: &mut impl Write,
        editor: &Editor,
        layout: &Layout,
        theme: &Theme,
    ) -> io::Result<()> {
        if layout.height == 0 {
            return Ok(());
        }
        queue!(stdout, MoveTo(0, layout.status_row()))?;

        // Message - show prominently
        if let Some(ref msg) = editor.message {
            queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;
            queue!(stdout, SetForegroundColor(theme.warning.to_crossterm()))?;
            queue!(stdout, Clear(ClearType::CurrentLine))?;
            let msg: String = msg.chars().take(layout.width as usize).collect();
            queue!(stdout, Print(msg))?;
            return Ok(());
        }

        queue!(
            stdout,
            SetBackgroundColor(theme.status_bar_bg.to_crossterm())
        )?;
        queue!(
            stdout,
            SetForegroundColor(theme.status_bar_fg.to_crossterm())
        )?;

        let status = status_text(editor, layout.width as usize);
        queue!(stdout, Print(status))?;
        queue!(stdout, SetAttribute(Attribute::Reset))?;

        Ok(())
    }

    fn position_caret(
        &self,
        stdout: &mut impl Write,
        editor: &Editor,
        layout: &Layout,
        settings: &Settings,
    ) -> io::Result<()> {
        match layout.caret_cell(editor.document(), editor.position()) {
            Some((x, y)) => {
                let style = if settings.caret_blink {
                    SetCursorStyle::BlinkingBlock
                } else {
                    SetCursorStyle::SteadyBlock
                };
                queue!(stdout, MoveTo(x, y), style, Show)?;
            }
            None => queue!(stdout, Hide)?,
        }
        Ok(())
    }
}

/// Run `setup`; if it fails, run `restore` before handing back the setup
/// error.
fn restore_on_error(
    setup: impl FnOnce() -> io::Result<()>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    if let Err(e) = setup() {
        if let Err(restore_err) = restore() {
            tracing::warn!(error = %restore_err, "terminal not fully restored");
        }
        return Err(e);
    }
    Ok(())
}

/// Status bar contents padded to `width`: line count on the left, caret
/// position on the right.
pub fn status_text(editor: &Editor, width: usize) -> String {
    let caret = editor.position();
    let left = format!(" {} lines ", editor.document().line_count());
    let right = format!(" Ln {}, Col {} ", caret.line + 1, caret.char + 2);

    let padding = width.saturating_sub(left.len() + right.len());
    let status = format!("{}{}{}", left, " ".repeat(padding), right);
    status.chars().take(width).collect()
}
