
use std::path::Path;
use itertools::Itertools;

use crate::entry::Entry;
use crate::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
  /// Rust module with a static table and `sample_word`
  #[default]
  Rust,
  /// Browser script with `WORD_BANK` and `sampleWord`
  Js,
  /// Bare JSON array of entries
  Json,
}

impl OutputFormat {
  pub fn from_extension(path: &Path) -> OutputFormat {
    match path.extension().and_then(|e| e.to_str()) {
      Some("js") | Some("mjs") => OutputFormat::Js,
      Some("json") => OutputFormat::Json,
      _ => OutputFormat::Rust,
    }
  }
}

pub fn render(entries: &[Entry], format: OutputFormat) -> Result<String, CompileError> {
  match format {
    OutputFormat::Rust => Ok(render_rust(entries)),
    OutputFormat::Js => render_js(entries),
    OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(entries)?)),
  }
}

const RUST_PREAMBLE: &str = "\
// Word bank generated by compile_words. Edit the word list and recompile
// rather than changing this file. `sample_word` needs rand 0.8.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
  pub word: &'static str,
  pub correct: bool,
  pub right: Option<&'static str>,
}

";

const RUST_SAMPLER: &str = "
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledWord {
  pub text: &'static str,
  pub correct: bool,
  pub right: Option<&'static str>,
}

pub const DEFAULT_PROB_WRONG: f64 = 0.1;

/// Picks a random entry, taking an incorrect one with probability `prob_wrong`
/// (always, with `force_wrong`). `None` when the pool it falls through to is empty.
pub fn sample_word<R: rand::Rng>(rng: &mut R, prob_wrong: f64, force_wrong: bool) -> Option<SampledWord> {
  let wrongs: Vec<&WordEntry> = WORD_BANK.iter().filter(|w| !w.correct).collect();
  let rights: Vec<&WordEntry> = WORD_BANK.iter().filter(|w| w.correct).collect();
  if force_wrong && !wrongs.is_empty() {
    let w = wrongs[rng.gen_range(0..wrongs.len())];
    return Some(SampledWord { text: w.word, correct: false, right: w.right });
  }
  let use_wrong = rng.gen::<f64>() < prob_wrong && !wrongs.is_empty();
  if use_wrong {
    let w = wrongs[rng.gen_range(0..wrongs.len())];
    return Some(SampledWord { text: w.word, correct: false, right: w.right });
  }
  if rights.is_empty() {
    return None;
  }
  let r = rights[rng.gen_range(0..rights.len())];
  Some(SampledWord { text: r.word, correct: true, right: None })
}
";

fn rust_entry_literal(entry: &Entry) -> String {
  let right = match &entry.right {
    Some(r) => format!("Some({:?})", r),
    None => "None".to_owned(),
  };
  format!("  WordEntry {{ word: {:?}, correct: {}, right: {} }},", entry.word, entry.correct, right)
}

pub fn render_rust(entries: &[Entry]) -> String {
  let table = if entries.is_empty() {
    "pub static WORD_BANK: &[WordEntry] = &[];\n".to_owned()
  }
  else {
    format!("pub static WORD_BANK: &[WordEntry] = &[\n{}\n];\n", entries.iter().map(rust_entry_literal).format("\n"))
  };
  format!("{}{}{}", RUST_PREAMBLE, table, RUST_SAMPLER)
}

const JS_PREAMBLE: &str = "// 默认词库\nconst WORD_BANK = ";

const JS_SAMPLER: &str = ";

function sampleWord(probWrong = 0.10, forceWrong = false) {
  const wrongs = WORD_BANK.filter(w => !w.correct);
  const rights = WORD_BANK.filter(w => w.correct);
  if (forceWrong && wrongs.length > 0) {
    const w = wrongs[Math.floor(Math.random()*wrongs.length)];
    return { text:w.word, correct:false, right:w.right };
  }
  const useWrong = Math.random() < probWrong && wrongs.length > 0;
  if (useWrong) {
    const w = wrongs[Math.floor(Math.random()*wrongs.length)];
    return { text:w.word, correct:false, right:w.right };
  }
  const r = rights[Math.floor(Math.random()*rights.length)];
  return { text:r.word, correct:true };
}
";

/// JSON literal with two-space indentation and non-ASCII text left as is,
/// which is also valid JavaScript.
pub fn render_js(entries: &[Entry]) -> Result<String, CompileError> {
  let table = serde_json::to_string_pretty(entries)?;
  Ok(format!("{}{}{}", JS_PREAMBLE, table, JS_SAMPLER))
}
