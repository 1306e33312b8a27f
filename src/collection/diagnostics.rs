//! Where query failures get reported.
//!
//! Queries themselves never print anything; callers hand in a
//! [`DiagnosticSink`] if they want failures surfaced somewhere.

use std::io::{self, Write};

use super::error::QueryError;

/// Something that accepts query failures.
pub trait DiagnosticSink {
    fn report(&self, error: &QueryError);
}

/// Forwards failures to the [`log`] facade at the error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, error: &QueryError) {
        log::error!("{error}");
    }
}

/// Writes failures to standard error, one line each.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, error: &QueryError) {
        // Nothing sensible to do if stderr itself is gone.
        let _ = writeln!(io::stderr().lock(), "{error}");
    }
}

/// Hands every failure to both sinks, in order.
impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
    fn report(&self, error: &QueryError) {
        self.0.report(error);
        self.1.report(error);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, error: &QueryError) {
        (**self).report(error)
    }
}
