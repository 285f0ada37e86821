
use std::{fmt, fs, path::PathBuf};
use tracing::info;

use crate::error::CompileError;
use crate::render::{render, OutputFormat};
use crate::word_list::WordList;

#[derive(Debug, Clone)]
pub struct CompileConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub format: OutputFormat,
}

impl CompileConfig {
  /// Format inferred from the output file name.
  pub fn new(input: PathBuf, output: PathBuf) -> CompileConfig {
    let format = OutputFormat::from_extension(&output);
    CompileConfig { input, output, format }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSummary {
  pub total: usize,
  pub correct: usize,
  pub incorrect: usize,
  pub output: PathBuf,
}

impl fmt::Display for CompileSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Word bank generated with {} entries", self.total)?;
    writeln!(f, "Correct words: {}", self.correct)?;
    writeln!(f, "Incorrect words: {}", self.incorrect)?;
    write!(f, "Saved to: {}", self.output.display())
  }
}

/// Reads the word list, renders it and overwrites the output file.
pub fn compile(config: &CompileConfig) -> Result<CompileSummary, CompileError> {
  let list = WordList::load(&config.input)?;
  let text = render(list.entries(), config.format)?;

  fs::write(&config.output, text).map_err(|source| CompileError::Write { path: config.output.clone(), source })?;
  info!("wrote {:?} word bank to {}", config.format, config.output.display());

  Ok(CompileSummary {
    total: list.len(),
    correct: list.correct_count(),
    incorrect: list.incorrect_count(),
    output: config.output.clone(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const INPUT: &str = "苹果\n莫明其妙/莫名其妙\n朗润 (lǎng rùn)\n";

  fn setup(dir: &tempfile::TempDir, output: &str) -> CompileConfig {
    let input = dir.path().join("words.txt");
    fs::write(&input, INPUT).unwrap();
    CompileConfig::new(input, dir.path().join(output))
  }

  #[test]
  fn test_compile_summary() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(&dir, "word_bank.rs");
    let summary = compile(&config).unwrap();
    assert_eq!(summary, CompileSummary { total: 4, correct: 3, incorrect: 1, output: config.output.clone() });
    assert_eq!(summary.to_string().lines().count(), 4);

    let written = fs::read_to_string(&config.output).unwrap();
    assert!(written.contains("WordEntry { word: \"莫明其妙\", correct: false, right: Some(\"莫名其妙\") },"));
  }

  #[test]
  fn test_compile_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(&dir, "words_curated.js");
    assert_eq!(config.format, OutputFormat::Js);

    compile(&config).unwrap();
    let first = fs::read(&config.output).unwrap();
    compile(&config).unwrap();
    let second = fs::read(&config.output).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_compile_overwrites_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(&dir, "words.json");
    fs::write(&config.output, "stale contents that are much longer than the real output would ever be".repeat(100)).unwrap();
    compile(&config).unwrap();
    let written = fs::read_to_string(&config.output).unwrap();
    assert!(written.starts_with("[\n"));
    assert!(!written.contains("stale"));
  }

  #[test]
  fn test_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = setup(&dir, "word_bank.rs");
    config.output = dir.path().join("no-such-dir").join("word_bank.rs");
    assert!(matches!(compile(&config), Err(CompileError::Write { .. })));
  }
}
