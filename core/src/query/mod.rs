//! `query <expression>`
//!
//! Expressions are alphanumeric terms combined with `&` (intersection) and `|`
//! (union). Both operators have equal precedence; more than one operation needs
//! explicit brackets, so `a | b | c` is refused while `(a | b) | c` is accepted.

pub mod evaluator;
pub mod validator;

pub use evaluator::{evaluate, Evaluation};
pub use validator::{validate, MAX_NESTING};

use crate::error::{CommandKind, Rejected};
use crate::log::LogSink;
use crate::store::{DocSet, Store};
use crate::tokenizer::tokenize_query;

/// Line reported when a valid query matches nothing.
pub const EMPTY_RESULTS: &str = "query results empty";

/// Format a result set as `query results <id>...`, ids in set order.
pub fn format_results(docs: &DocSet) -> String {
    if docs.is_empty() {
        return EMPTY_RESULTS.to_string();
    }
    let ids: Vec<&str> = docs.iter().map(String::as_str).collect();
    format!("query results {}", ids.join(" "))
}

/// Evaluate a validated stream from its start and report the outcome to `sink`.
pub fn run<S: AsRef<str>>(store: &Store, tokens: &[S], sink: &dyn LogSink) -> DocSet {
    let Evaluation { docs, .. } = evaluate(store, tokens, 0);
    tracing::debug!(terms = tokens.len(), hits = docs.len(), "query evaluated");
    sink.info(&format_results(&docs));
    docs
}

/// Handle the fields following the `query` keyword: re-tokenize, validate, and
/// evaluate. Grammar diagnostics go to `sink`.
pub fn handle<S: AsRef<str>>(
    store: &Store,
    fields: &[S],
    sink: &dyn LogSink,
) -> Result<DocSet, Rejected> {
    let tokens = tokenize_query(fields);
    if let Err(err) = validate(tokens.as_slice()) {
        sink.error(&err.to_string());
        return Err(Rejected(CommandKind::Query));
    }
    Ok(run(store, tokens.as_slice(), sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LogLevel, MemorySink};

    fn store() -> Store {
        let mut store = Store::new();
        store.set_document("1", vec!["soup".into(), "tomato".into(), "cream".into(), "salt".into()]);
        store.set_document("2", vec!["butter".into()]);
        store
    }

    #[test]
    fn empty_result_notice() {
        let sink = MemorySink::new(LogLevel::Info);
        let docs = handle(&store(), &["sugar"], &sink).unwrap();
        assert!(docs.is_empty());
        assert_eq!(sink.last().as_deref(), Some(EMPTY_RESULTS));
    }

    #[test]
    fn results_line_lists_ids() {
        let sink = MemorySink::new(LogLevel::Info);
        let docs = handle(&store(), &["butter"], &sink).unwrap();
        assert_eq!(docs, DocSet::from(["2".to_string()]));
        assert_eq!(sink.last().as_deref(), Some("query results 2"));
    }

    #[test]
    fn fields_are_rejoined_before_splitting() {
        let sink = MemorySink::new(LogLevel::Info);
        let docs = handle(&store(), &["(butter|", "soup)"], &sink).unwrap();
        let mut ids: Vec<_> = docs.into_iter().collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn invalid_query_logs_diagnostic() {
        let sink = MemorySink::new(LogLevel::Info);
        let out = handle(&store(), &["butter", "|", "soup", "|", "salt"], &sink);
        assert_eq!(out, Err(Rejected(CommandKind::Query)));
        assert_eq!(
            sink.entries(),
            vec![(
                LogLevel::Error,
                "query error query command has to use () to specify more than one operation".to_string()
            )]
        );
    }

    #[test]
    fn format_results_joins_ids() {
        let docs = DocSet::from(["7".to_string()]);
        assert_eq!(format_results(&docs), "query results 7");
        assert_eq!(format_results(&DocSet::new()), EMPTY_RESULTS);
    }
}
