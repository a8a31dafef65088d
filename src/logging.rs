use std::fs::{self, File};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Send logs to `<cache_dir>/caretline/caretline.log`. The terminal belongs
/// to the UI, so nothing is written to stdout or stderr. `RUST_LOG` picks
/// the level, default warn.
pub fn init_tracing() {
    let Some(file) = open_log_file() else {
        return;
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // A subscriber may already be set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
}

fn open_log_file() -> Option<File> {
    let dir = dirs::cache_dir()?.join("caretline");
    fs::create_dir_all(&dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join("caretline.log"))
        .ok()
}
