use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Identifier assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A stored document. Known fields are typed; anything else the caller sent
/// is kept as-is in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub title: Option<String>,
}

#[derive(Default)]
struct Entries {
    by_id: HashMap<DocumentId, Document>,
    order: Vec<DocumentId>,
}

/// In-memory document store, shared by every tool call for the life of the
/// process. Inserts take the write lock; lookups, scans and searches share the
/// read lock.
#[derive(Default)]
pub struct DocumentStore {
    entries: RwLock<Entries>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, document: Document) -> DocumentId {
        let mut entries = self.entries.write();
        let mut id = DocumentId::generate();
        while entries.by_id.contains_key(&id) {
            id = DocumentId::generate();
        }
        entries.by_id.insert(id, document);
        entries.order.push(id);
        debug!(%id, total = entries.order.len(), "document stored");
        id
    }

    pub fn get(&self, id: &DocumentId) -> Option<Document> {
        self.entries.read().by_id.get(id).cloned()
    }

    /// Looks up a caller-supplied identifier. Only the exact string handed out
    /// by `insert` matches; other spellings of the same UUID are not found.
    pub fn lookup(&self, id: &str) -> Option<(DocumentId, Document)> {
        let parsed = id.parse::<DocumentId>().ok()?;
        if parsed.to_string() != id {
            return None;
        }
        self.get(&parsed).map(|document| (parsed, document))
    }

    /// All entries in insertion order.
    pub fn scan(&self) -> Vec<(DocumentId, Document)> {
        let entries = self.entries.read();
        entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id).map(|doc| (*id, doc.clone())))
            .collect()
    }

    /// Case-insensitive substring match on content. An empty query matches
    /// every document.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        self.scan()
            .into_iter()
            .filter(|(_, doc)| doc.content_or_empty().to_lowercase().contains(&needle))
            .map(|(id, doc)| SearchHit {
                id: id.to_string(),
                title: doc.title,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
