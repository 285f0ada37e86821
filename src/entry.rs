
use serde::{Serialize, Deserialize};

/// One vocabulary record. `right` is only set on incorrect entries and holds
/// the spelling the entry should have had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
  pub word: String,
  pub correct: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub right: Option<String>,
}

impl Entry {
  pub fn correct(word: &str) -> Entry {
    Entry { word: word.to_owned(), correct: true, right: None }
  }

  pub fn wrong(word: &str, right: &str) -> Entry {
    Entry { word: word.to_owned(), correct: false, right: Some(right.to_owned()) }
  }
}
