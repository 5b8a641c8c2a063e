use std::collections::{HashMap, HashSet};

/// Documents are named by their integer literal, kept as text.
pub type DocId = String;
pub type DocSet = HashSet<DocId>;

/// Forward and inverted maps kept in lockstep.
///
/// For every doc-id `d` and lowercase token `t`, `d` is in `inverted[t]` iff `t`
/// appears (case-folded) in `forward[d]`. Mutation goes through `&mut self`, so a
/// replace is never observable half-applied.
#[derive(Debug, Default, Clone)]
pub struct Store {
    forward: HashMap<DocId, Vec<String>>,
    inverted: HashMap<String, DocSet>,
}

impl Store {
    pub fn new() -> Self { Self::default() }

    /// Replace the document `id` with `tokens`. Tokens are stored as given in the
    /// forward map and lowercased for the inverted map. Sets emptied by the
    /// replace stay in the map.
    pub fn set_document(&mut self, id: &str, tokens: Vec<String>) {
        if let Some(old) = self.forward.remove(id) {
            for token in &old {
                if let Some(ids) = self.inverted.get_mut(&token.to_lowercase()) {
                    ids.remove(id);
                }
            }
            tracing::debug!(doc_id = id, old_tokens = old.len(), "replacing document");
        }

        for token in &tokens {
            self.inverted
                .entry(token.to_lowercase())
                .or_default()
                .insert(id.to_string());
        }
        self.forward.insert(id.to_string(), tokens);
    }

    /// Documents containing `token`, compared case-insensitively. Unknown tokens
    /// yield an empty set.
    pub fn lookup(&self, token: &str) -> DocSet {
        self.inverted
            .get(&token.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_document(&self, id: &str) -> Option<&[String]> {
        self.forward.get(id).map(Vec::as_slice)
    }

    pub fn contains_document(&self, id: &str) -> bool { self.forward.contains_key(id) }

    /// Number of stored documents.
    pub fn len(&self) -> usize { self.forward.len() }

    pub fn is_empty(&self) -> bool { self.forward.is_empty() }

    /// Distinct lowercase tokens ever indexed, including ones whose set is now empty.
    pub fn token_count(&self) -> usize { self.inverted.len() }
}
