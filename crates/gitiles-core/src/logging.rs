//! Logging init: file under the XDG state dir, falling back to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,gitiles_core=debug,gitiles=debug";

/// Writer that is either the log file or stderr (used when the file clone fails).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Default log file: `~/.local/state/gitiles/gitiles.log`.
pub fn default_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitiles")?;
    Ok(xdg_dirs.get_state_home().join("gitiles.log"))
}

/// Opens `path` for appending, creating parent directories.
fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(fs::OpenOptions::new().create(true).append(true).open(path)?)
}

/// Initialize structured logging to the default log file.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = default_log_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("gitiles logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when init_logging() fails.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// File logging if possible, stderr otherwise.
pub fn init() {
    if let Err(e) = init_logging() {
        init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", e);
    }
}
