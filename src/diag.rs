/// Structured diagnostics emitted by the resolver and detection pipeline.
///
/// Components report progress as `DiagEvent` values to an injected sink
/// instead of writing to the console directly, so the pipeline stays quiet
/// by default and observable in tests.
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum DiagEvent {
    PatternCompiled { pattern: String, base: PathBuf },
    BaseMissing { base: PathBuf },
    PatternMatched { pattern: String, files: usize },
    WalkError { message: String },
    FileLoaded { path: PathBuf, lines: usize },
    FileUnreadable { path: PathBuf, message: String },
    IndexBuilt { windows: usize, candidates: usize },
    BlocksFound { blocks: usize },
}

impl fmt::Display for DiagEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagEvent::PatternCompiled { pattern, base } => {
                write!(f, "glob pattern: {pattern} | base={}", base.display())
            }
            DiagEvent::BaseMissing { base } => {
                write!(f, "base {} does not exist, skipping", base.display())
            }
            DiagEvent::PatternMatched { pattern, files } => {
                write!(f, "pattern {pattern} matched {files} files")
            }
            DiagEvent::WalkError { message } => write!(f, "walk error: {message}"),
            DiagEvent::FileLoaded { path, lines } => {
                write!(f, "read {} ({lines} lines)", path.display())
            }
            DiagEvent::FileUnreadable { path, message } => {
                write!(f, "unreadable {}: {message}", path.display())
            }
            DiagEvent::IndexBuilt { windows, candidates } => {
                write!(f, "seed windows: {windows} | candidate groups: {candidates}")
            }
            DiagEvent::BlocksFound { blocks } => write!(f, "duplicate blocks: {blocks}"),
        }
    }
}

pub trait DiagSink {
    fn emit(&mut self, event: DiagEvent);
}

/// Prints every event to stderr. Selected by `--debug`.
pub struct StderrSink;

impl DiagSink for StderrSink {
    fn emit(&mut self, event: DiagEvent) {
        eprintln!("[debug] {event}");
    }
}

/// Discards every event. The default sink.
pub struct NullSink;

impl DiagSink for NullSink {
    fn emit(&mut self, _event: DiagEvent) {}
}

/// Collects events for assertions in tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<DiagEvent>,
}

#[cfg(test)]
impl DiagSink for RecordingSink {
    fn emit(&mut self, event: DiagEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_display_formats() {
        let event = DiagEvent::PatternCompiled {
            pattern: "src/**/*.rs".to_string(),
            base: PathBuf::from("src"),
        };
        assert_eq!(event.to_string(), "glob pattern: src/**/*.rs | base=src");

        let event = DiagEvent::IndexBuilt {
            windows: 120,
            candidates: 3,
        };
        assert_eq!(event.to_string(), "seed windows: 120 | candidate groups: 3");
    }

    #[test]
    fn recording_sink_collects_in_order() {
        let mut sink = RecordingSink::default();
        sink.emit(DiagEvent::BlocksFound { blocks: 0 });
        sink.emit(DiagEvent::BlocksFound { blocks: 2 });
        assert_eq!(
            sink.events,
            vec![
                DiagEvent::BlocksFound { blocks: 0 },
                DiagEvent::BlocksFound { blocks: 2 },
            ]
        );
    }

    #[test]
    fn null_sink_accepts_events() {
        let mut sink = NullSink;
        sink.emit(DiagEvent::WalkError {
            message: "denied".to_string(),
        });
    }
}
