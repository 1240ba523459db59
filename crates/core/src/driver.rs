// crates/core/src/driver.rs
use std::path::PathBuf;

use crate::counter::{Counter, DEFAULT_MARKER, WILDCARD_LABEL};
use crate::error::{Result, TallyError};
use crate::extension::file_extension;
use crate::reader::{Encoding, for_each_line};
use crate::registry::Registry;
use crate::sink::ReportSink;
use crate::walker::walk;

/// Runtime configuration for one counting run.
#[derive(Debug, Clone)]
pub struct TallyConfig {
    /// Root of the walk; may name a single file.
    pub root: PathBuf,
    pub encoding: Encoding,
    /// Literal substring counted as a deprecation.
    pub marker: String,
}

impl TallyConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            encoding: Encoding::default(),
            marker: DEFAULT_MARKER.to_owned(),
        }
    }
}

/// Summary of one counting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Files whose lines were fully consumed.
    pub files_processed: usize,
    /// Distinct extension buckets observed.
    pub extensions_seen: usize,
    /// Files skipped on open/decode failure.
    pub read_failures: usize,
    /// Report blocks handed to the sink.
    pub reports_emitted: usize,
    /// False when the root did not exist and nothing was processed.
    pub root_valid: bool,
}

/// Run the counting pipeline: validate the root, walk it, classify every
/// line into its extension bucket, then render the reports.
///
/// A missing root is a recoverable, logged condition: it is reported
/// through `sink` and the run ends with a default outcome rather than an
/// error. Per-file read failures are likewise reported and skipped. The
/// wildcard aggregate block is emitted only when more than one extension
/// was seen.
///
/// # Errors
///
/// Returns an error only when directory enumeration fails mid-walk.
pub fn run(config: &TallyConfig, sink: &mut dyn ReportSink) -> Result<RunOutcome> {
    if !config.root.exists() {
        let err = TallyError::InvalidRoot { path: config.root.clone() };
        sink.emit_error(&err.to_string());
        return Ok(RunOutcome::default());
    }

    let mut registry = Registry::new(config.marker.as_str());
    let mut files_processed = 0usize;
    let mut read_failures = 0usize;

    walk(&config.root, |path| {
        let extension = file_extension(path);
        let counter = registry.counter_for(&extension);
        match for_each_line(path, config.encoding, |line| counter.process_line(line)) {
            Ok(()) => files_processed += 1,
            Err(err) => {
                read_failures += 1;
                sink.emit_error(&err.to_string());
            }
        }
    })?;

    let counters = registry.into_sorted();
    let extensions_seen = counters.len();
    let mut aggregate = Counter::with_marker(WILDCARD_LABEL, config.marker.as_str());
    let mut reports_emitted = 0usize;

    for counter in &counters {
        sink.emit_report(&counter.to_string());
        aggregate.merge(counter);
        reports_emitted += 1;
    }
    if extensions_seen > 1 {
        sink.emit_report(&aggregate.to_string());
        reports_emitted += 1;
    }

    Ok(RunOutcome {
        files_processed,
        extensions_seen,
        read_failures,
        reports_emitted,
        root_valid: true,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;

    /// Sink recording everything it receives.
    #[derive(Debug, Default)]
    struct RecordingSink {
        reports: Vec<String>,
        errors: Vec<String>,
    }

    impl ReportSink for RecordingSink {
        fn emit_report(&mut self, block: &str) {
            self.reports.push(block.to_owned());
        }

        fn emit_error(&mut self, message: &str) {
            self.errors.push(message.to_owned());
        }
    }

    fn run_over(root: &Path) -> (RunOutcome, RecordingSink) {
        let config = TallyConfig::new(root);
        let mut sink = RecordingSink::default();
        let outcome = run(&config, &mut sink).expect("run succeeds");
        (outcome, sink)
    }

    #[test]
    fn single_extension_suppresses_the_aggregate() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("a.txt"), "hello\n   \n@Deprecated foo\n").expect("write");

        let (outcome, sink) = run_over(dir.path());
        assert_eq!(outcome.files_processed, 1);
        assert_eq!(outcome.extensions_seen, 1);
        assert_eq!(outcome.reports_emitted, 1);
        assert_eq!(
            sink.reports,
            vec![
                "Counts for files [*.txt] :\n\
                 1 empty lines\n\
                 2 not empty lines\n\
                 3 total lines\n\
                 1 deprecations\n"
            ]
        );
    }

    #[test]
    fn two_extensions_emit_per_bucket_blocks_plus_aggregate() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("a.txt"), "hello\n").expect("write");
        fs::write(dir.path().join("b.java"), "\n").expect("write");

        let (outcome, sink) = run_over(dir.path());
        assert_eq!(outcome.extensions_seen, 2);
        assert_eq!(outcome.reports_emitted, 3);

        // Label-sorted buckets, aggregate last.
        assert!(sink.reports[0].starts_with("Counts for files [*.java] :\n"));
        assert!(sink.reports[1].starts_with("Counts for files [*.txt] :\n"));
        assert_eq!(
            sink.reports[2],
            "Counts for files [*.*] :\n\
             1 empty lines\n\
             1 not empty lines\n\
             2 total lines\n\
             0 deprecations\n"
        );
    }

    #[test]
    fn missing_root_reports_and_produces_nothing() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("no-such-dir");

        let (outcome, sink) = run_over(&missing);
        assert!(!outcome.root_valid);
        assert_eq!(outcome.reports_emitted, 0);
        assert!(sink.reports.is_empty());
        assert_eq!(sink.errors.len(), 1);
        assert!(sink.errors[0].contains("is not valid"));
    }

    #[test]
    fn dotless_file_lands_in_the_empty_extension_bucket() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("Makefile"), "all:\n\techo hi\n").expect("write");
        fs::write(dir.path().join("notes.txt"), "x\n").expect("write");

        let (outcome, sink) = run_over(dir.path());
        assert_eq!(outcome.extensions_seen, 2);
        assert!(sink.reports[0].starts_with("Counts for files [*] :\n"));
        assert!(sink.reports[1].starts_with("Counts for files [*.txt] :\n"));
    }

    #[test]
    fn empty_directory_emits_zero_reports() {
        let dir = tempdir().expect("temp dir");
        let (outcome, sink) = run_over(dir.path());

        assert!(outcome.root_valid);
        assert_eq!(outcome.reports_emitted, 0);
        assert!(sink.reports.is_empty());
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn unreadable_file_is_reported_and_skipped() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("good.txt"), "fine\n").expect("write");
        fs::write(dir.path().join("bad.txt"), b"\xFF\xFE\xFD broken\n").expect("write");

        let (outcome, sink) = run_over(dir.path());
        assert_eq!(outcome.files_processed, 1);
        assert_eq!(outcome.read_failures, 1);
        assert_eq!(sink.errors.len(), 1);
        assert!(sink.errors[0].contains("bad.txt"));
        // The surviving file still gets its report.
        assert_eq!(outcome.reports_emitted, 1);
    }

    #[test]
    fn single_file_root_is_tallied() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("solo.rs");
        fs::write(&file, "fn main() {}\n").expect("write");

        let (outcome, sink) = run_over(&file);
        assert_eq!(outcome.files_processed, 1);
        assert!(sink.reports[0].starts_with("Counts for files [*.rs] :\n"));
    }

    #[test]
    fn custom_marker_flows_into_every_bucket() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("a.py"), "# OBSOLETE\n").expect("write");
        fs::write(dir.path().join("b.rs"), "// OBSOLETE too\n@Deprecated\n").expect("write");

        let mut config = TallyConfig::new(dir.path());
        config.marker = "OBSOLETE".to_owned();
        let mut sink = RecordingSink::default();
        let outcome = run(&config, &mut sink).expect("run succeeds");

        assert_eq!(outcome.reports_emitted, 3);
        let aggregate = sink.reports.last().expect("aggregate");
        assert!(aggregate.contains("2 deprecations\n"));
    }

    #[test]
    fn latin1_encoding_is_honoured() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("l1.txt"), b"caf\xE9\n").expect("write");

        let mut config = TallyConfig::new(dir.path());
        config.encoding = Encoding::Latin1;
        let mut sink = RecordingSink::default();
        let outcome = run(&config, &mut sink).expect("run succeeds");

        assert_eq!(outcome.read_failures, 0);
        assert!(sink.reports[0].contains("1 not empty lines\n"));
    }
}
