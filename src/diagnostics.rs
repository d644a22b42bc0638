/*
    Diagnostics
*/

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};

/// An append-only destination for diagnostic records.
///
/// Sinks are fire-and-forget: a failure to record is never
/// reported back to the arithmetic that raised it.
pub trait Sink: Send + Sync {
    /// Appends one record.
    fn append(&self, record: &str);
}

/// A `Sink` appending one line per record to a file.
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Opens (or creates) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl Sink for FileSink {
    fn append(&self, record: &str) {
        match self.file.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", record) {
                    log::warn!("dropped diagnostic record: {}", e);
                }
            }
            Err(_) => log::warn!("dropped diagnostic record: sink poisoned"),
        }
    }
}

static SINK: RwLock<Option<Arc<dyn Sink>>> = RwLock::new(None);

/// Installs the process-wide sink, returning the previous one.
pub fn install(sink: Arc<dyn Sink>) -> Option<Arc<dyn Sink>> {
    match SINK.write() {
        Ok(mut slot) => slot.replace(sink),
        Err(_) => None,
    }
}

/// Removes the process-wide sink.
pub fn uninstall() -> Option<Arc<dyn Sink>> {
    match SINK.write() {
        Ok(mut slot) => slot.take(),
        Err(_) => None,
    }
}

// Logs a record and forwards it to the installed sink, if any.
pub(crate) fn report(args: fmt::Arguments<'_>) {
    log::debug!("{}", args);
    if let Ok(slot) = SINK.read() {
        if let Some(sink) = slot.as_ref() {
            sink.append(&args.to_string());
        }
    }
}
