pub mod config;
pub mod dispatcher;
pub mod error;
pub mod index_command;
pub mod log;
pub mod query;
pub mod store;
pub mod tokenizer;

pub use config::Config;
pub use dispatcher::{Dispatcher, Response};
pub use error::{CommandKind, IndexError, ParseError, QueryError, Rejected};
pub use log::{LogLevel, LogSink, MemorySink};
pub use store::{DocId, DocSet, Store};
