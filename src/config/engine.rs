use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use rhai::{Engine, Scope};

use super::Settings;
use crate::error::{Error, Result};

/// The Rhai scripting engine for configuration
pub struct ConfigEngine {
    engine: Engine,
    settings: Arc<RwLock<Settings>>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        let settings = Arc::new(RwLock::new(Settings::default()));
        let engine = Self::create_engine(Arc::clone(&settings));

        Self { engine, settings }
    }

    fn register_flag(
        engine: &mut Engine,
        settings: &Arc<RwLock<Settings>>,
        name: &str,
        apply: fn(&mut Settings, bool),
    ) {
        let s = Arc::clone(settings);
        engine.register_fn(name, move |enabled: bool| {
            if let Ok(mut settings) = s.write() {
                apply(&mut settings, enabled);
            }
        });
    }

    fn create_engine(settings: Arc<RwLock<Settings>>) -> Engine {
        let mut engine = Engine::new();

        // Limit script execution for safety
        engine.set_max_expr_depths(64, 64);
        engine.set_max_operations(100_000);

        {
            let s = Arc::clone(&settings);
            engine.register_fn("set_theme", move |name: &str| {
                if let Ok(mut settings) = s.write() {
                    settings.theme = name.to_string();
                }
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("get_theme", move || -> String {
                s.read().map(|s| s.theme.clone()).unwrap_or_default()
            });
        }

        Self::register_flag(&mut engine, &settings, "set_show_line_numbers", |s, v| {
            s.show_line_numbers = v
        });
        Self::register_flag(&mut engine, &settings, "set_highlight_current_line", |s, v| {
            s.highlight_current_line = v
        });
        Self::register_flag(&mut engine, &settings, "set_caret_blink", |s, v| {
            s.caret_blink = v
        });
        Self::register_flag(&mut engine, &settings, "set_mouse", |s, v| s.mouse = v);

        {
            let s = Arc::clone(&settings);
            engine.register_fn("bind", move |key: &str, action: &str| {
                if let Ok(mut settings) = s.write() {
                    settings
                        .keybinds
                        .push((key.to_string(), action.to_string()));
                }
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("unbind", move |key: &str| {
                if let Ok(mut settings) = s.write() {
                    settings.keybinds.push((key.to_string(), String::new()));
                }
            });
        }

        engine.on_print(|msg| tracing::info!(target: "config", "{}", msg));

        engine
    }

    /// Load and execute a config file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.run(&content, path)
    }

    /// Evaluate a Rhai script string
    #[cfg(test)]
    pub fn eval(&mut self, script: &str) -> Result<()> {
        self.run(script, Path::new("<inline>"))
    }

    fn run(&mut self, script: &str, origin: &Path) -> Result<()> {
        let script_error = |message: String| Error::Script {
            path: origin.to_path_buf(),
            message,
        };

        let ast = self
            .engine
            .compile(script)
            .map_err(|e| script_error(format!("parse error: {}", e)))?;

        let mut scope = Scope::new();
        self.engine
            .run_ast_with_scope(&mut scope, &ast)
            .map_err(|e| script_error(e.to_string()))?;

        Ok(())
    }

    /// Get the current settings (cloned)
    pub fn settings(&self) -> Settings {
        self.settings.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("caretline"))
    }

    /// Get the default config file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("init.rhai"))
    }

    /// Directory searched for user theme files
    pub fn themes_dir() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("themes"))
    }

    /// Load the default config file if it exists
    pub fn load_default(&mut self) -> Result<()> {
        if let Some(config_file) = Self::config_file() {
            if config_file.exists() {
                tracing::info!(path = %config_file.display(), "loading config");
                return self.load_file(&config_file);
            }
        }
        Ok(()) // No config file is fine
    }
}

impl Default for ConfigEngine {
    fn default() -> Self {
        Self::new()
    }
}
