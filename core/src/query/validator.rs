use crate::error::QueryError;
use crate::tokenizer::{is_alphanumeric, is_operator};

/// Deepest bracket nesting accepted. The evaluator recurses once per level.
pub const MAX_NESTING: usize = 256;

/// Check a query token stream (keyword excluded) against the grammar without
/// evaluating it. Rules are tried in order and the first violation is returned:
/// length, trailing element, character class, brackets, then alternation and
/// operator count.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<(), QueryError> {
    let last = match tokens.last() {
        Some(last) => last.as_ref(),
        None => return Err(QueryError::TooShort),
    };

    if last.contains(&['&', '|', '('][..]) {
        return Err(QueryError::InvalidEnding(last.to_string()));
    }

    if let Some(bad) = tokens
        .iter()
        .map(|t| t.as_ref())
        .find(|t| !is_alphanumeric(t) && !is_operator(t))
    {
        return Err(QueryError::InvalidCharacter(bad.to_string()));
    }

    check_brackets(tokens)?;
    check_alternation(tokens)
}

fn check_brackets<S: AsRef<str>>(tokens: &[S]) -> Result<(), QueryError> {
    let mut open: Vec<usize> = Vec::new();
    for (pos, token) in tokens.iter().enumerate() {
        match token.as_ref() {
            "(" => {
                open.push(pos);
                if open.len() > MAX_NESTING {
                    tracing::debug!(position = pos, "bracket nesting too deep");
                    return Err(QueryError::TooDeep(MAX_NESTING));
                }
            }
            ")" => {
                if open.pop().is_none() {
                    tracing::debug!(position = pos, "unmatched closing bracket");
                    return Err(QueryError::UnbalancedBrackets);
                }
            }
            _ => {}
        }
    }

    match open.last() {
        None => Ok(()),
        Some(&pos) => {
            tracing::debug!(position = pos, unclosed = open.len(), "unclosed bracket");
            Err(QueryError::UnbalancedBrackets)
        }
    }
}

/// Terms and operators must alternate, starting and ending on a term. Brackets
/// do not flip the expectation, but `(` may only stand where a term is due and
/// `)` only where an operator is due. A second operator is refused unless a
/// bracket has already appeared.
fn check_alternation<S: AsRef<str>>(tokens: &[S]) -> Result<(), QueryError> {
    let mut expect_term = true;
    let mut grouped = false;
    let mut operators = 0usize;

    for token in tokens {
        match token.as_ref() {
            "(" | ")" => {
                let opening = token.as_ref() == "(";
                if opening != expect_term {
                    return Err(QueryError::Alternation);
                }
                grouped = true;
            }
            "&" | "|" => {
                if expect_term {
                    return Err(QueryError::Alternation);
                }
                operators += 1;
                if operators > 1 && !grouped {
                    return Err(QueryError::MissingParentheses);
                }
                expect_term = true;
            }
            _ => {
                if !expect_term {
                    return Err(QueryError::Alternation);
                }
                expect_term = false;
            }
        }
    }

    if expect_term {
        return Err(QueryError::Alternation);
    }
    Ok(())
}
