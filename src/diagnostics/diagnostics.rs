use crate::errors::errors::Error;

/// Receives every diagnostic as it is produced.
pub trait DiagnosticSink {
    fn report(&mut self, source_name: &str, line: u32, column: u32, message: &str);

    /// Forwards an `Error`, rendering its message with or without highlight.
    fn report_error(&mut self, error: &Error, highlight: bool) {
        let position = error.get_position();
        self.report(
            position.file.as_str(),
            position.line,
            position.column,
            &error.message(highlight),
        );
    }
}

/// One reported line, as received by `CollectingSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub source_name: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub reports: Vec<Report>,
}

impl CollectingSink {
    pub fn new() -> Self {
        CollectingSink::default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, source_name: &str, line: u32, column: u32, message: &str) {
        self.reports.push(Report {
            source_name: source_name.to_string(),
            line,
            column,
            message: message.to_string(),
        });
    }
}

/// Prints `file:line:column: error: message` to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, source_name: &str, line: u32, column: u32, message: &str) {
        eprintln!("{}:{}:{}: error: {}", source_name, line, column, message);
    }
}

/// Emits each report as a `tracing` error event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, source_name: &str, line: u32, column: u32, message: &str) {
        tracing::error!(file = source_name, line, column, "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _source_name: &str, _line: u32, _column: u32, _message: &str) {}
}
