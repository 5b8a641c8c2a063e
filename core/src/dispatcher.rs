use crate::error::{ParseError, Rejected};
use crate::index_command;
use crate::log::LogSink;
use crate::query;
use crate::store::{DocId, DocSet, Store};
use crate::tokenizer::split_fields;

/// What a well-formed command line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Indexed(DocId),
    Results(DocSet),
    /// The handler refused the command and logged why.
    Rejected(Rejected),
}

/// Routes command lines to the index and query handlers over one store.
pub struct Dispatcher<L: LogSink> {
    store: Store,
    sink: L,
}

impl<L: LogSink> Dispatcher<L> {
    pub fn new(sink: L) -> Self { Self { store: Store::new(), sink } }

    pub fn store(&self) -> &Store { &self.store }

    pub fn sink(&self) -> &L { &self.sink }

    pub fn into_sink(self) -> L { self.sink }

    /// Run one line. Empty lines are skipped (`Ok(None)`); lines that are not a
    /// recognisable command are logged and returned as a [`ParseError`].
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Response>, ParseError> {
        if line.is_empty() {
            return Ok(None);
        }

        let fields = split_fields(line);
        if fields.len() < 2 {
            return Err(self.reject(ParseError::TooShort));
        }

        let response = match fields[0] {
            "index" => match index_command::handle(&mut self.store, fields.as_slice(), &self.sink) {
                Ok(_) => Response::Indexed(fields[1].to_string()),
                Err(rejected) => Response::Rejected(rejected),
            },
            "query" => match query::handle(&self.store, &fields[1..], &self.sink) {
                Ok(docs) => Response::Results(docs),
                Err(rejected) => Response::Rejected(rejected),
            },
            other => return Err(self.reject(ParseError::UnknownKeyword(other.to_string()))),
        };
        Ok(Some(response))
    }

    /// Run every line of `text`, returning the parse errors met on the way.
    /// Handler-level failures are only visible through the sink.
    pub fn parse_commands(&mut self, text: &str) -> Vec<ParseError> {
        if text.is_empty() {
            return vec![self.reject(ParseError::Empty)];
        }

        let mut errors = Vec::new();
        for line in text.lines() {
            if let Err(err) = self.execute_line(line) {
                errors.push(err);
            }
        }
        tracing::debug!(errors = errors.len(), docs = self.store.len(), "batch processed");
        errors
    }

    fn reject(&self, err: ParseError) -> ParseError {
        self.sink.error(&err.to_string());
        err
    }
}
