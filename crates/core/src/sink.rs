// crates/core/src/sink.rs

/// Destination for rendered report blocks and error messages.
///
/// The core defines only the string content; the host decides where it
/// lands (console, build log, test buffer).
pub trait ReportSink {
    /// Hand one rendered report block to the sink. Blocks carry their own
    /// trailing newline.
    fn emit_report(&mut self, block: &str);

    /// Report a non-fatal error at elevated severity.
    fn emit_error(&mut self, message: &str);
}

/// Sink printing report blocks to stdout and errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for ConsoleSink {
    fn emit_report(&mut self, block: &str) {
        print!("{block}");
    }

    fn emit_error(&mut self, message: &str) {
        eprintln!("[error] {message}");
    }
}
