use noticeblocks_core::config::types::LoggingConfig;
use std::fs::File;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Flushes the file writer on drop, so it must outlive every event.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Crates whose events the configured level applies to; everything else,
/// liquid and comrak included, only reports warnings.
const OWN_TARGETS: [&str; 2] = ["noticeblocks_core", "nblk"];

/// Install the stderr subscriber and, when `[logging].file` is set, a
/// plain-text file layer with its own level. `RUST_LOG` overrides both.
pub fn init(cfg: &LoggingConfig) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter(&cfg.level));

    let file_layer = cfg.file.as_ref().map(|path| {
        let file = File::create(path).unwrap_or_else(|e| {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            std::process::exit(1);
        });
        let (writer, guard) = tracing_appender::non_blocking(file);
        let _ = FILE_GUARD.set(guard);

        let level = cfg.file_level.as_deref().unwrap_or("debug");
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(filter(level))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)))
}

/// Default filter directives; unknown levels fall back to `info`.
fn directives(level: &str) -> String {
    let level = match level.to_lowercase().as_str() {
        l @ ("error" | "warn" | "info" | "debug" | "trace") => l.to_string(),
        _ => "info".to_string(),
    };
    let scoped: Vec<String> = OWN_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
    format!("warn,{}", scoped.join(","))
}
