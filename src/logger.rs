use once_cell::sync::OnceCell;

/// Trace verbosity, ordered `Error < Notice < Info < Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 1,
    Notice = 2,
    Info = 3,
    Debug = 4,
}

/// A sink receiving trace lines emitted while parsing.
pub type TraceSink = fn(&str, LogLevel);

static TRACE: OnceCell<(TraceSink, LogLevel)> = OnceCell::new();

/// Install a process-wide trace sink. Messages at or below `level` are delivered.
/// The sink can be installed once; a later call is rejected with its own level.
pub fn set_trace(sink: TraceSink, level: LogLevel) -> Result<(), LogLevel> {
    TRACE.set((sink, level)).map_err(|(_, rejected)| rejected)
}

/// Lazily formatted trace emission: the closure runs only when a sink is installed and the
/// level passes.
pub(crate) fn trace<F: FnOnce() -> String>(level: LogLevel, message: F) {
    if let Some((sink, max)) = TRACE.get() {
        if level <= *max {
            sink(&message(), level);
        }
    }
}
