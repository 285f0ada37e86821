
use std::{collections::HashSet, fs, path::Path};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::classify::{classify_line, annotated_word, LineShape};
use crate::entry::Entry;
use crate::error::CompileError;

const BYTE_ORDER_MARK: char = '\u{feff}';

lazy_static! {
  // \n, \r\n and a lone \r all end a line
  static ref LINE_BREAK_RE: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Ordered, deduplicated entries. A display string is only ever added once;
/// the first line that produces it decides its position and correctness.
#[derive(Debug, Default, Clone)]
pub struct WordList {
  entries: Vec<Entry>,
  seen: HashSet<String>,
}

impl WordList {
  pub fn new() -> WordList {
    WordList::default()
  }

  pub fn from_text(text: &str) -> WordList {
    let mut list = WordList::new();
    for (i, line) in LINE_BREAK_RE.split(text.trim_start_matches(BYTE_ORDER_MARK)).enumerate() {
      list.add_line(i + 1, line);
    }
    list
  }

  pub fn load(path: &Path) -> Result<WordList, CompileError> {
    let text = fs::read_to_string(path).map_err(|source| CompileError::Read { path: path.to_owned(), source })?;
    let list = WordList::from_text(&text);
    info!("read {} entries from {}", list.len(), path.display());
    Ok(list)
  }

  /// Adds whatever entries `line` produces. `line_number` is only used for
  /// diagnostics.
  pub fn add_line(&mut self, line_number: usize, line: &str) {
    match classify_line(line) {
      LineShape::Pair { wrong, right } => {
        self.push(line_number, Entry::wrong(wrong, right));
        self.push(line_number, Entry::correct(right));
      },
      LineShape::Annotated { head, annotation } => {
        self.push(line_number, Entry::correct(&annotated_word(head, annotation)));
      },
      LineShape::Plain(word) => {
        self.push(line_number, Entry::correct(word));
      },
      LineShape::Skipped(reason) => {
        debug!("line {}: skipped {:?} ({})", line_number, line.trim(), reason);
      }
    }
  }

  fn push(&mut self, line_number: usize, entry: Entry) {
    if self.seen.contains(&entry.word) {
      debug!("line {}: duplicate {:?} dropped", line_number, entry.word);
      return;
    }
    self.seen.insert(entry.word.clone());
    self.entries.push(entry);
  }

  pub fn entries(&self) -> &[Entry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn correct_count(&self) -> usize {
    self.entries.iter().filter(|e| e.correct).count()
  }

  pub fn incorrect_count(&self) -> usize {
    self.entries.iter().filter(|e| !e.correct).count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn words(list: &WordList) -> Vec<&str> {
    list.entries().iter().map(|e| e.word.as_str()).collect()
  }

  #[test]
  fn test_end_to_end_example() {
    let list = WordList::from_text("苹果\n莫明其妙/莫名其妙\n朗润 (lǎng rùn)\n");
    assert_eq!(list.entries(), &[
      Entry::correct("苹果"),
      Entry::wrong("莫明其妙", "莫名其妙"),
      Entry::correct("莫名其妙"),
      Entry::correct("朗润 (lǎng rùn)"),
    ]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.correct_count(), 3);
    assert_eq!(list.incorrect_count(), 1);
  }

  #[test]
  fn test_duplicates_keep_first_occurrence() {
    let list = WordList::from_text("苹果\n香蕉\n苹果\n朗润 (lǎng rùn)\n朗润(lǎng rùn)\n");
    assert_eq!(words(&list), vec!["苹果", "香蕉", "朗润 (lǎng rùn)"]);
  }

  #[test]
  fn test_wrong_goes_before_an_already_seen_right() {
    let list = WordList::from_text("莫名其妙\n莫明其妙/莫名其妙\n");
    assert_eq!(list.entries(), &[
      Entry::correct("莫名其妙"),
      Entry::wrong("莫明其妙", "莫名其妙"),
    ]);
  }

  #[test]
  fn test_recurring_pair_halves_appear_once() {
    let list = WordList::from_text("随君直到夜朗西/随君直到夜郎西\n随君直到夜郎溪/随君直到夜郎西\n随君直到夜朗西/随君直到夜郎西\n");
    assert_eq!(list.entries(), &[
      Entry::wrong("随君直到夜朗西", "随君直到夜郎西"),
      Entry::correct("随君直到夜郎西"),
      Entry::wrong("随君直到夜郎溪", "随君直到夜郎西"),
    ]);
  }

  #[test]
  fn test_first_shape_decides_correctness() {
    let list = WordList::from_text("莫明其妙\n莫明其妙/莫名其妙\n");
    assert_eq!(list.entries(), &[
      Entry::correct("莫明其妙"),
      Entry::correct("莫名其妙"),
    ]);
  }

  #[test]
  fn test_malformed_lines_are_skipped() {
    let list = WordList::from_text("abc (def\nabc def)\na/b/c\n朗润 (lǎng) rùn\n\n   \n苹果\n");
    assert_eq!(words(&list), vec!["苹果"]);
  }

  #[test]
  fn test_crlf_and_byte_order_mark() {
    let list = WordList::from_text("\u{feff}苹果\r\n香蕉\r\n");
    assert_eq!(words(&list), vec!["苹果", "香蕉"]);
  }

  #[test]
  fn test_lone_carriage_return_ends_a_line() {
    let list = WordList::from_text("苹果\r莫明其妙/莫名其妙\r\r香蕉\n朗润 (lǎng rùn)\r");
    assert_eq!(words(&list), vec!["苹果", "莫明其妙", "莫名其妙", "香蕉", "朗润 (lǎng rùn)"]);
    assert!(list.entries().iter().all(|e| !e.word.contains('\r')));
  }

  #[test]
  fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    match WordList::load(&path) {
      Err(CompileError::Read { path: p, .. }) => assert_eq!(p, path),
      other => panic!("expected a read error, got {:?}", other),
    }
  }

  #[test]
  fn test_load_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, [0xe8u8, 0x8b, 0x0a, 0xff]).unwrap();
    assert!(matches!(WordList::load(&path), Err(CompileError::Read { .. })));
  }
}
