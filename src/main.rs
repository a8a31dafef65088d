use std::env;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;

mod config;
mod editor;
mod error;
mod input;
mod logging;
mod render;
mod theme;

use config::{ConfigEngine, Settings};
use editor::{Document, Editor};
use input::Keymap;
use render::Renderer;
use theme::Theme;

/// Everything the event loop needs besides the editor itself.
struct Session {
    settings: Settings,
    theme: Theme,
    keymap: Keymap,
}

/// Load config, theme and keymap. Problems are logged and returned as a
/// message for the status line; the editor still starts with defaults.
fn load_session() -> (Session, Vec<String>) {
    let mut problems = Vec::new();

    let mut engine = ConfigEngine::new();
    if let Err(e) = engine.load_default() {
        tracing::warn!(error = %e, "config not applied");
        problems.push(e.to_string());
    }
    let settings = engine.settings();

    let themes_dir = ConfigEngine::themes_dir();
    let theme = match theme::resolve_theme(&settings.theme, themes_dir.as_deref()) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!(
                error = %e,
                available = ?theme::list_builtin_themes(),
                "falling back to default theme"
            );
            problems.push(e.to_string());
            Theme::default()
        }
    };

    let mut keymap = Keymap::default();
    for e in keymap.apply_overrides(&settings.keybinds) {
        problems.push(e.to_string());
    }

    (
        Session {
            settings,
            theme,
            keymap,
        },
        problems,
    )
}

async fn run(
    editor: &mut Editor,
    session: &Session,
    renderer: &mut Renderer,
) -> std::io::Result<()> {
    let mut layout = renderer.layout(editor, &session.settings);
    renderer.render(editor, &layout, &session.theme, &session.settings)?;

    // Event stream for async key reading
    let mut event_stream = EventStream::new();

    while editor.running {
        let Some(event) = event_stream.next().await else {
            break;
        };
        let event = event?;

        if let Event::Resize(width, height) = event {
            renderer.resize(width, height);
            layout = renderer.layout(editor, &session.settings);
        }

        if input::handle_event(editor, &session.keymap, &layout, event) && editor.running {
            renderer.render(editor, &layout, &session.theme, &session.settings)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    logging::init_tracing();

    // Command line arguments are the document lines
    let args: Vec<String> = env::args().skip(1).collect();
    let mut editor = if args.is_empty() {
        Editor::sample()
    } else {
        Editor::new(Document::from_lines(&args))
    };
    tracing::info!(lines = editor.document().line_count(), "starting caretline");

    let (session, problems) = load_session();
    if !problems.is_empty() {
        editor.set_message(problems.join("; "));
    }

    let mouse = session.settings.mouse;
    Renderer::setup(mouse)?;
    let result = match Renderer::new() {
        Ok(mut renderer) => run(&mut editor, &session, &mut renderer).await,
        Err(e) => Err(e),
    };
    // Restore the terminal even when the loop failed
    Renderer::teardown(mouse)?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "editor stopped");
    }
    result
}
