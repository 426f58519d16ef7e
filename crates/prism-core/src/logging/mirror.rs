use log::{LevelFilter, Log, Metadata, Record};

use crate::diag::DiagnosticSink;
use crate::error::level_label;

/// `log` backend wrapper that copies qualifying records into a
/// [`DiagnosticSink`] so they show up in the on-screen console.
///
/// Every record is still handed to `inner`; mirroring is additive.
pub struct ConsoleMirror<L> {
    inner: L,
    sink: &'static DiagnosticSink,
    level: LevelFilter,
}

impl<L: Log> ConsoleMirror<L> {
    pub fn new(inner: L, sink: &'static DiagnosticSink, level: LevelFilter) -> Self {
        Self { inner, sink, level }
    }

    #[inline]
    fn mirrors(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }
}

impl<L: Log> Log for ConsoleMirror<L> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.enabled(metadata) || self.mirrors(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if self.inner.enabled(record.metadata()) {
            self.inner.log(record);
        }
        if self.mirrors(record.metadata()) {
            self.sink.append(format!(
                "{}{}: {}",
                level_label(record.level()),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}
