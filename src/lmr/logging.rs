//! Injected logging.
//!
//! Stores never reach for the process-wide logger themselves. They are handed
//! a [`Journal`], which either forwards to whatever `log` backend the binary
//! installed ([`Journal::global`]) or to a sink of the caller's choosing, such
//! as the capturing [`MemoryLog`] used by tests.

use std::fmt;
use std::sync::{Arc, Mutex};

use log::{Level, Log, Metadata, Record};

#[derive(Clone)]
pub struct Journal {
    sink: Arc<dyn Log>,
    target: &'static str,
}

impl Journal {
    pub fn new(sink: Arc<dyn Log>, target: &'static str) -> Self {
        return Self { sink, target };
    }

    /// Journal backed by the logger installed through the `log` facade.
    pub fn global(target: &'static str) -> Self {
        return Self::new(Arc::new(GlobalLog), target);
    }

    /// Same sink, different target.
    pub fn with_target(&self, target: &'static str) -> Self {
        return Self::new(self.sink.clone(), target);
    }

    pub fn target(&self) -> &'static str {
        return self.target;
    }

    pub fn error(&self, args: fmt::Arguments) {
        self.emit(Level::Error, args);
    }

    pub fn warn(&self, args: fmt::Arguments) {
        self.emit(Level::Warn, args);
    }

    pub fn info(&self, args: fmt::Arguments) {
        self.emit(Level::Info, args);
    }

    pub fn debug(&self, args: fmt::Arguments) {
        self.emit(Level::Debug, args);
    }

    fn emit(&self, level: Level, args: fmt::Arguments) {
        self.sink.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(self.target)
                .module_path_static(Some(module_path!()))
                .build(),
        );
    }
}

impl fmt::Debug for Journal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return f.debug_struct("Journal").field("target", &self.target).finish();
    }
}

/// Forwards to `log::logger()`, honouring `log::max_level()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLog;

impl Log for GlobalLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        return metadata.level() <= log::max_level() && log::logger().enabled(metadata);
    }

    fn log(&self, record: &Record) {
        if record.level() <= log::max_level() {
            log::logger().log(record);
        }
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        return self
            .records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default();
    }

    pub fn count(&self, level: Level) -> usize {
        return self
            .records()
            .iter()
            .filter(|record| record.level == level)
            .count();
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl Log for MemoryLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        return true;
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push(CapturedRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}
