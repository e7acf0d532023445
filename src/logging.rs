//! Sends every log line to stderr and to a log file next to the executable.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE_VAR: &str = "UPTIMECHECK_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "uptimecheck.log";

/// Writes everything to two writers.
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Initializes the logger. The level is taken from `RUST_LOG` and defaults to `info`.
pub fn init() -> io::Result<PathBuf> {
    let path = log_file_path();
    let file = open_log_file(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(Tee::new(io::stderr(), file))))
        .init();
    Ok(path)
}

/// The log file given in `UPTIMECHECK_LOG_FILE`, or `uptimecheck.log` next to the executable.
pub fn log_file_path() -> PathBuf {
    if let Some(path) = env::var_os(LOG_FILE_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(DEFAULT_LOG_FILE)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
