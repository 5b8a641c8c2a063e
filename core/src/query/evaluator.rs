use crate::store::{DocSet, Store};

/// Result of evaluating one bracket level: the combined set and the position
/// just past the level's closing `)` (or the end of the stream at top level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub docs: DocSet,
    pub next: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetOp {
    Union,
    Intersection,
}

impl SetOp {
    fn from_token(token: &str) -> Self {
        if token == "&" { SetOp::Intersection } else { SetOp::Union }
    }

    fn apply(self, acc: DocSet, operand: DocSet) -> DocSet {
        match self {
            SetOp::Union => {
                let (mut big, small) = if acc.len() >= operand.len() { (acc, operand) } else { (operand, acc) };
                big.extend(small);
                big
            }
            SetOp::Intersection => {
                let (small, big) = if acc.len() <= operand.len() { (acc, operand) } else { (operand, acc) };
                small.into_iter().filter(|id| big.contains(id)).collect()
            }
        }
    }
}

/// Evaluate a validated token stream from `start`, left to right with no
/// precedence between `&` and `|`.
///
/// Each operator folds the operand before it into the running set using the
/// operator seen before that (initially union, so the empty start set is an
/// identity). A `(` recurses; the nested call returns at its `)` and its set
/// becomes the pending operand here.
pub fn evaluate<S: AsRef<str>>(store: &Store, tokens: &[S], start: usize) -> Evaluation {
    let mut acc = DocSet::new();
    let mut op = SetOp::Union;
    let mut operand = DocSet::new();
    let mut pos = start;

    while pos < tokens.len() {
        match tokens[pos].as_ref() {
            "(" => {
                let inner = evaluate(store, tokens, pos + 1);
                operand = inner.docs;
                pos = inner.next;
            }
            ")" => {
                return Evaluation { docs: op.apply(acc, operand), next: pos + 1 };
            }
            tok @ ("&" | "|") => {
                acc = op.apply(acc, std::mem::take(&mut operand));
                op = SetOp::from_token(tok);
                pos += 1;
            }
            term => {
                operand = store.lookup(term);
                pos += 1;
            }
        }
    }

    Evaluation { docs: op.apply(acc, operand), next: pos }
}
