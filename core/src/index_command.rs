//! `index doc-id token...`
//!
//! Adds a document to the store, replacing any earlier document with the same id.

use crate::error::{CommandKind, IndexError, Rejected};
use crate::log::LogSink;
use crate::store::{DocId, Store};
use crate::tokenizer::{is_alphanumeric, is_doc_id};

/// A command that passed [`validate`]. Only `validate` can build one, so
/// [`apply`] never sees an unchecked id or token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCommand {
    doc_id: DocId,
    tokens: Vec<String>,
}

impl IndexCommand {
    pub fn doc_id(&self) -> &str { &self.doc_id }

    pub fn tokens(&self) -> &[String] { &self.tokens }
}

/// Check the shape of `[ "index", doc_id, token, ... ]` without touching the store.
pub fn validate<S: AsRef<str>>(command: &[S]) -> Result<IndexCommand, IndexError> {
    if command.len() < 3 {
        return Err(IndexError::TooShort);
    }

    let doc_id = command[1].as_ref();
    if !is_doc_id(doc_id) {
        return Err(IndexError::InvalidDocId(doc_id.to_string()));
    }

    if let Some(bad) = command[2..].iter().map(|t| t.as_ref()).find(|t| !is_alphanumeric(t)) {
        return Err(IndexError::InvalidToken(bad.to_string()));
    }

    Ok(IndexCommand {
        doc_id: doc_id.to_string(),
        tokens: command[2..].iter().map(|t| t.as_ref().to_string()).collect(),
    })
}

/// Store a validated command and report `index ok <doc-id>`.
pub fn apply(store: &mut Store, command: IndexCommand, sink: &dyn LogSink) -> String {
    let IndexCommand { doc_id, tokens } = command;
    let num_tokens = tokens.len();

    store.set_document(&doc_id, tokens);
    tracing::debug!(doc_id = %doc_id, num_tokens, "indexed document");

    let message = format!("index ok {doc_id}");
    sink.info(&message);
    message
}

/// Validate then apply. The specific diagnostic for a refused command goes to
/// `sink`; the caller only learns that it was refused.
pub fn handle<S: AsRef<str>>(
    store: &mut Store,
    command: &[S],
    sink: &dyn LogSink,
) -> Result<String, Rejected> {
    match validate(command) {
        Ok(valid) => Ok(apply(store, valid, sink)),
        Err(err) => {
            sink.error(&err.to_string());
            Err(Rejected(CommandKind::Index))
        }
    }
}
