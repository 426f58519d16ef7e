use state::InitCell;

use super::DiagnosticSink;

// Lazily built on first access; `const` construction would also work.
static GLOBAL: InitCell<DiagnosticSink> = InitCell::new();

/// Returns the process-wide sink, creating it on first use.
///
/// The sink lives until process teardown; there is no shutdown call.
pub fn global() -> &'static DiagnosticSink {
    GLOBAL.get_or_init(DiagnosticSink::new)
}
