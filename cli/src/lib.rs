use anyhow::{Context, Result};
use docquery_core::{Config, Dispatcher, LogLevel, LogSink, ParseError};
use parking_lot::Mutex;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Writes each message on its own line, skipping those above the threshold.
pub struct WriterSink<W: Write> {
    threshold: LogLevel,
    out: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W, config: &Config) -> Self {
        Self { threshold: config.log_level, out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W { self.out.into_inner() }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn log(&self, level: LogLevel, message: &str) {
        if !level.enabled(self.threshold) {
            return;
        }
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{message}").and_then(|_| out.flush()) {
            tracing::warn!(%err, "failed to write output");
        }
    }
}

/// Feed commands to the dispatcher one line at a time until the reader is
/// exhausted. Returns the number of lines refused as parse errors.
pub fn run_lines<R, L>(reader: R, dispatcher: &mut Dispatcher<L>) -> Result<usize>
where
    R: BufRead,
    L: LogSink,
{
    let mut refused = 0;
    for line in reader.lines() {
        let line = line.context("reading command line")?;
        if dispatcher.execute_line(&line).is_err() {
            refused += 1;
        }
    }
    tracing::info!(refused, docs = dispatcher.store().len(), "input exhausted");
    Ok(refused)
}

/// Process a whole command file as one batch.
pub fn run_file<L: LogSink>(path: &Path, dispatcher: &mut Dispatcher<L>) -> Result<Vec<ParseError>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let errors = dispatcher.parse_commands(&text);
    tracing::info!(path = %path.display(), errors = errors.len(), "batch complete");
    Ok(errors)
}
