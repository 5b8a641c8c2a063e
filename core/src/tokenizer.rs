use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALNUM: Regex = Regex::new(r"^[0-9a-zA-Z]+$").expect("valid regex");
    static ref DOC_ID: Regex = Regex::new(r"^[0-9]+$").expect("valid regex");
    // Each operator is its own element; everything between operators is one run.
    static ref QUERY_PIECE: Regex = Regex::new(r"[()&|]|[^()&|]+").expect("valid regex");
}

pub const OPERATORS: [&str; 4] = ["(", ")", "&", "|"];

pub fn is_alphanumeric(token: &str) -> bool { ALNUM.is_match(token) }

pub fn is_doc_id(token: &str) -> bool { DOC_ID.is_match(token) }

pub fn is_operator(token: &str) -> bool { OPERATORS.iter().any(|op| *op == token) }

/// Split a command line on runs of whitespace.
pub fn split_fields(line: &str) -> Vec<&str> { line.split_whitespace().collect() }

/// Re-tokenize the fields after the `query` keyword: the fields are joined
/// without separators, then cut at every boundary adjacent to `(`, `)`, `&`, `|`.
pub fn tokenize_query<S: AsRef<str>>(fields: &[S]) -> Vec<String> {
    let joined: String = fields.iter().map(|f| f.as_ref()).collect();
    QUERY_PIECE
        .find_iter(&joined)
        .map(|m| m.as_str().to_string())
        .collect()
}
