
use lazy_static::lazy_static;
use regex::Regex;

pub const PAIR_SEPARATOR: char = '/';

lazy_static! {
  // 朗润 (lǎng rùn)
  static ref ANNOTATED_RE: Regex = Regex::new(r"^(.+?)\s*\((.+?)\)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
  Pair { wrong: &'a str, right: &'a str },
  Annotated { head: &'a str, annotation: &'a str },
  Plain(&'a str),
  Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// Has a `/` but not exactly two non-empty halves.
  MalformedPair,
  /// Has both parentheses but the annotation pattern does not match.
  MalformedAnnotation,
  /// Has only one of `(` and `)`.
  UnbalancedParenthesis,
  Blank,
}

impl std::fmt::Display for SkipReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    let text = match self {
      SkipReason::MalformedPair => "separator does not split into two words",
      SkipReason::MalformedAnnotation => "annotation is not a trailing parenthesis",
      SkipReason::UnbalancedParenthesis => "unbalanced parenthesis",
      SkipReason::Blank => "blank line",
    };
    write!(f, "{}", text)
  }
}

/// Decides which of the three entry shapes `line` has. The separator wins over
/// parentheses, so `a (x)/b` is read as a pair.
pub fn classify_line(line: &str) -> LineShape<'_> {
  let line = line.trim();

  if line.is_empty() {
    return LineShape::Skipped(SkipReason::Blank);
  }

  if line.contains(PAIR_SEPARATOR) {
    let parts: Vec<&str> = line.split(PAIR_SEPARATOR).map(str::trim).collect();
    return match parts.as_slice() {
      &[wrong, right] if !wrong.is_empty() && !right.is_empty() => LineShape::Pair { wrong, right },
      _ => LineShape::Skipped(SkipReason::MalformedPair),
    };
  }

  let has_open = line.contains('(');
  let has_close = line.contains(')');

  if has_open && has_close {
    match ANNOTATED_RE.captures(line) {
      Some(caps) => {
        let head = caps.get(1).map_or("", |m| m.as_str()).trim();
        let annotation = caps.get(2).map_or("", |m| m.as_str()).trim();
        LineShape::Annotated { head, annotation }
      },
      None => LineShape::Skipped(SkipReason::MalformedAnnotation),
    }
  }
  else if has_open || has_close {
    LineShape::Skipped(SkipReason::UnbalancedParenthesis)
  }
  else {
    LineShape::Plain(line)
  }
}

pub fn annotated_word(head: &str, annotation: &str) -> String {
  format!("{} ({})", head, annotation)
}
