use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct SinkState {
    entries: Vec<String>,
    has_error: bool,
}

/// Consistent view of the sink taken in a single critical section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticSnapshot {
    pub entries: Vec<String>,
    pub has_error: bool,
}

/// Thread-safe, append-only buffer of diagnostic lines.
///
/// Producers (driver callbacks, worker threads) call [`append`](Self::append);
/// the console overlay polls [`entries`](Self::entries) /
/// [`has_error`](Self::has_error) once per frame and calls
/// [`clear`](Self::clear) when the user dismisses it.
///
/// Every operation takes the same lock for its whole duration, so calls are
/// linearizable. None of them can fail.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    state: Mutex<SinkState>,
}

impl DiagnosticSink {
    /// Empty sink with the error flag lowered.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(SinkState { entries: Vec::new(), has_error: false }),
        }
    }

    // Each critical section leaves the state consistent, so a lock poisoned by
    // a panicking holder still guards valid data.
    fn lock(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `message` and raises the error flag.
    ///
    /// Empty messages are accepted and raise the flag too.
    pub fn append(&self, message: impl Into<String>) {
        let message = message.into();
        let mut state = self.lock();
        state.entries.push(message);
        state.has_error = true;
    }

    /// Drops every entry and lowers the error flag.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.has_error = false;
    }

    /// Owned copy of the entries in insertion order.
    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }

    /// True when anything was appended since the last [`clear`](Self::clear).
    pub fn has_error(&self) -> bool {
        self.lock().has_error
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Entries and error flag read together.
    pub fn snapshot(&self) -> DiagnosticSnapshot {
        let state = self.lock();
        DiagnosticSnapshot {
            entries: state.entries.clone(),
            has_error: state.has_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn new_sink_is_clean() {
        let sink = DiagnosticSink::new();
        assert!(sink.entries().is_empty());
        assert!(!sink.has_error());
        assert!(sink.is_empty());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let sink = DiagnosticSink::new();
        sink.append("a");
        sink.append("b");
        assert_eq!(sink.entries(), ["a", "b"]);
    }

    #[test]
    fn many_appends_round_out_in_order() {
        let sink = DiagnosticSink::new();
        let expected: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
        for line in &expected {
            sink.append(line.as_str());
        }
        assert_eq!(sink.entries(), expected);
        assert_eq!(sink.len(), 100);
    }

    // ── error flag ────────────────────────────────────────────────────────

    #[test]
    fn append_raises_flag_even_after_clear() {
        let sink = DiagnosticSink::new();
        sink.append("first");
        sink.clear();
        sink.append("second");
        assert!(sink.has_error());
        assert_eq!(sink.entries(), ["second"]);
    }

    #[test]
    fn empty_message_still_raises_flag() {
        let sink = DiagnosticSink::new();
        sink.append("");
        assert!(sink.has_error());
        assert_eq!(sink.entries(), [""]);
    }

    #[test]
    fn gl_error_then_clear() {
        let sink = DiagnosticSink::new();
        sink.append("GL_INVALID_ENUM");
        assert!(sink.has_error());
        sink.clear();
        assert!(!sink.has_error());
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn clear_twice_is_same_as_once() {
        let sink = DiagnosticSink::new();
        sink.append("x");
        sink.clear();
        assert_eq!(sink.snapshot(), DiagnosticSnapshot::default());
        sink.clear();
        assert_eq!(sink.snapshot(), DiagnosticSnapshot::default());
    }

    // ── snapshots ─────────────────────────────────────────────────────────

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let sink = DiagnosticSink::new();
        sink.append("before");
        let snap = sink.snapshot();
        sink.append("after");
        assert_eq!(snap.entries, ["before"]);
        assert!(snap.has_error);
        assert_eq!(sink.len(), 2);
    }

    // ── concurrency ───────────────────────────────────────────────────────

    #[test]
    fn concurrent_appends_lose_nothing() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let sink = Arc::new(DiagnosticSink::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        sink.append(format!("msg-{t}-{i}"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let entries = sink.entries();
        assert_eq!(entries.len(), THREADS * PER_THREAD);

        // Per-thread order is preserved and no entry is garbled.
        let mut next = [0usize; THREADS];
        for entry in &entries {
            let mut parts = entry.strip_prefix("msg-").unwrap().split('-');
            let t: usize = parts.next().unwrap().parse().unwrap();
            let i: usize = parts.next().unwrap().parse().unwrap();
            assert!(parts.next().is_none());
            assert_eq!(i, next[t]);
            next[t] += 1;
        }
        assert!(next.iter().all(|&n| n == PER_THREAD));
    }

    #[test]
    fn reader_never_sees_entries_without_flag() {
        let sink = Arc::new(DiagnosticSink::new());
        let writer = {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for i in 0..500 {
                    sink.append(format!("w{i}"));
                    if i % 50 == 0 {
                        sink.clear();
                    }
                }
            })
        };
        for _ in 0..500 {
            let snap = sink.snapshot();
            assert_eq!(snap.has_error, !snap.entries.is_empty());
        }
        writer.join().unwrap();
    }

    #[test]
    fn poisoned_lock_does_not_block_producers() {
        let sink = Arc::new(DiagnosticSink::new());
        let poisoner = Arc::clone(&sink);
        let result = thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("producer died while holding the sink lock");
        })
        .join();
        assert!(result.is_err());

        sink.append("still works");
        assert_eq!(sink.entries(), ["still works"]);
        assert!(sink.has_error());
    }
}
