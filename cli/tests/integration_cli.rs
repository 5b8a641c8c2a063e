use docquery::{run_file, run_lines, WriterSink};
use docquery_core::{Config, Dispatcher, LogLevel, ParseError};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

const SESSION: &str = "index 1 soup tomato cream salt
index 2 cake sugar eggs flour sugar cocoa cream butter
index 1 bread butter salt
index 3 soup fish potato salt pepper
query (butter | potato) & salt
query sugar
nonsense here
query soup
";

fn output_lines(dispatcher: Dispatcher<WriterSink<Vec<u8>>>) -> Vec<String> {
    let bytes = dispatcher.into_sink().into_inner();
    String::from_utf8(bytes).unwrap().lines().map(String::from).collect()
}

fn sorted_ids(line: &str) -> Vec<&str> {
    let mut ids: Vec<&str> = line.strip_prefix("query results ").unwrap().split(' ').collect();
    ids.sort();
    ids
}

#[test]
fn stdin_session_prints_each_outcome() {
    let mut dispatcher = Dispatcher::new(WriterSink::new(Vec::new(), &Config::default()));
    let refused = run_lines(Cursor::new(SESSION), &mut dispatcher).unwrap();
    assert_eq!(refused, 1);

    let lines = output_lines(dispatcher);
    assert_eq!(lines.len(), 8);
    assert_eq!(&lines[..4], ["index ok 1", "index ok 2", "index ok 1", "index ok 3"]);
    assert_eq!(sorted_ids(&lines[4]), vec!["1", "3"]);
    assert_eq!(lines[5], "query results 2");
    assert_eq!(lines[6], "parse error command needs to start with index or query");
    assert_eq!(lines[7], "query results 3");
}

#[test]
fn error_level_only_prints_diagnostics() {
    let config = Config::new(LogLevel::Error);
    let mut dispatcher = Dispatcher::new(WriterSink::new(Vec::new(), &config));
    run_lines(Cursor::new("index 1 soup\nindex 1 so*p\nquery a | b | c\n"), &mut dispatcher).unwrap();

    assert_eq!(
        output_lines(dispatcher),
        vec![
            "index error tokens have to be alphanumeric characters",
            "query error query command has to use () to specify more than one operation",
        ]
    );
}

#[test]
fn batch_file_collects_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commands.txt");
    fs::write(&path, "index 4 tea\n\nquery\nquery tea\n").unwrap();

    let mut dispatcher = Dispatcher::new(WriterSink::new(Vec::new(), &Config::default()));
    let errors = run_file(&path, &mut dispatcher).unwrap();
    assert_eq!(errors, vec![ParseError::TooShort]);
    assert_eq!(
        output_lines(dispatcher),
        vec!["index ok 4", "parse error command length needs to be longer than 1", "query results 4"]
    );
}

#[test]
fn empty_batch_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let mut dispatcher = Dispatcher::new(WriterSink::new(Vec::new(), &Config::default()));
    let errors = run_file(&path, &mut dispatcher).unwrap();
    assert_eq!(errors, vec![ParseError::Empty]);
    assert_eq!(output_lines(dispatcher), vec!["parse error command cannot be empty"]);
}

#[test]
fn missing_batch_file_is_reported() {
    let dir = tempdir().unwrap();
    let mut dispatcher = Dispatcher::new(WriterSink::new(Vec::new(), &Config::default()));
    let err = run_file(&dir.path().join("absent.txt"), &mut dispatcher).unwrap_err();
    assert!(err.to_string().starts_with("reading "));
}
