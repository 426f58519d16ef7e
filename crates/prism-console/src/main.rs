use std::thread;

use anyhow::{anyhow, Context, Result};
use prism_core::coords::{Rect, Size, WidgetBounds};
use prism_core::diag::{self, DiagnosticSink};
use prism_core::error::ReportedError;
use prism_core::logging::{init_logging, LoggingConfig};
use prism_core::time::{timestamp_now, Stopwatch};

/// Error codes a GL debug callback would typically forward.
const GL_ERRORS: &[(&str, u32)] = &[
    ("GL_INVALID_ENUM", 0x0500),
    ("GL_INVALID_VALUE", 0x0501),
    ("GL_INVALID_OPERATION", 0x0502),
    ("GL_OUT_OF_MEMORY", 0x0505),
];

const VIEWPORT: Size = Size::new(1280.0, 720.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let clock = Stopwatch::start();
    let sink = diag::global();

    // ── producers ─────────────────────────────────────────────────────────
    let producers = GL_ERRORS
        .iter()
        .enumerate()
        .map(|(i, &(name, code))| {
            thread::Builder::new()
                .name(format!("gl-producer-{i}"))
                .spawn(move || sink.append(format!("{name} (0x{code:04X}) from producer {i}")))
                .with_context(|| format!("failed to spawn producer {i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    for handle in producers {
        handle.join().map_err(|_| anyhow!("producer thread panicked"))?;
    }

    // Mirrored into the sink by the logger at the default console level.
    let err = ReportedError::warn("shader cache miss; recompiling pipelines");
    log::info!("reported: {err}");

    // ── overlay ───────────────────────────────────────────────────────────
    // Docked to the bottom edge; wider than the viewport, so clamping shrinks it.
    let panel = WidgetBounds::new(Rect::new(40.0, VIEWPORT.height - 240.0, 1400.0, 240.0))
        .with_min_size(Size::new(320.0, 120.0))
        .clamp_to(VIEWPORT);

    print_overlay(sink, panel);

    sink.clear();
    log::info!(
        "console cleared (has_error = {}) after {:.3}s",
        sink.has_error(),
        clock.elapsed_seconds()
    );

    Ok(())
}

fn print_overlay(sink: &DiagnosticSink, panel: WidgetBounds) {
    let snap = sink.snapshot();
    let r = panel.rect;

    println!();
    println!(
        "  ── console @ ({:.0}, {:.0}) {:.0}x{:.0} ── {} ──",
        r.origin.x,
        r.origin.y,
        r.size.width,
        r.size.height,
        timestamp_now()
    );
    for (i, line) in snap.entries.iter().enumerate() {
        println!("  {:>3}  {line}", i + 1);
    }
    println!(
        "  ── {} entries, error flag {} ──",
        snap.entries.len(),
        if snap.has_error { "SET" } else { "clear" }
    );
    println!();
}
