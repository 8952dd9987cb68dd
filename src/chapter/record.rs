//! Raw per-chapter records as they appear in the combined snapshot

use crate::de::{lenient_list, present};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recorded interaction between two characters.
///
/// Only the two character fields are interpreted; every other field is
/// carried through verbatim. A character field is `None` when absent and
/// `Some(Value::Null)` when given as an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub character_1: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub character_2: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InteractionRecord {
    /// Create a record between two named characters
    pub fn new(character_1: impl Into<String>, character_2: impl Into<String>) -> Self {
        Self {
            character_1: Some(Value::String(character_1.into())),
            character_2: Some(Value::String(character_2.into())),
            extra: Map::new(),
        }
    }

    /// Attach an extra pass-through field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// First character's raw name, or `""` when absent or not a string
    pub fn first(&self) -> &str {
        self.character_1.as_ref().and_then(Value::as_str).unwrap_or("")
    }

    /// Second character's raw name, or `""` when absent or not a string
    pub fn second(&self) -> &str {
        self.character_2.as_ref().and_then(Value::as_str).unwrap_or("")
    }
}

/// A chapter's entry in the combined snapshot.
///
/// Each list is read on its own: a malformed element is dropped without
/// affecting its neighbours or the other list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterRecord {
    /// Explicit character list, preferred over the derived one when non-empty
    #[serde(default, deserialize_with = "lenient_list")]
    pub characters: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub interactions: Vec<InteractionRecord>,
}

impl ChapterRecord {
    pub fn new(interactions: Vec<InteractionRecord>) -> Self {
        Self {
            characters: Vec::new(),
            interactions,
        }
    }

    pub fn with_characters<I, S>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters = characters.into_iter().map(Into::into).collect();
        self
    }
}
