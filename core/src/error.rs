use std::fmt;
use thiserror::Error;

/// Malformed or unrecognised command lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse error command cannot be empty")]
    Empty,

    #[error("parse error command length needs to be longer than 1")]
    TooShort,

    #[error("parse error command needs to start with index or query")]
    UnknownKeyword(String),
}

/// Reasons an `index` command is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("index error index command needs to have at least length 3")]
    TooShort,

    #[error("index error doc-id has to be an integer")]
    InvalidDocId(String),

    #[error("index error tokens have to be alphanumeric characters")]
    InvalidToken(String),
}

/// Grammar violations of a `query` expression, in diagnostic priority order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query error query command needs to have at least length 2")]
    TooShort,

    #[error("query error query command has to end with either alphanumeric characters or )")]
    InvalidEnding(String),

    #[error("query error query command have to be either alphanumeric characters or ()&|")]
    InvalidCharacter(String),

    #[error("query error query command has to have valid combination of brackets")]
    UnbalancedBrackets,

    #[error("query error query command nests brackets deeper than {0}")]
    TooDeep(usize),

    #[error("query error query command has to have valid combination of alphanumeric characters and &|")]
    Alternation,

    #[error("query error query command has to use () to specify more than one operation")]
    MissingParentheses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Index,
    Query,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Index => f.write_str("index"),
            CommandKind::Query => f.write_str("query"),
        }
    }
}

/// Returned by a handler once its specific diagnostic has gone to the log sink.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0} error see log for detail")]
pub struct Rejected(pub CommandKind);
