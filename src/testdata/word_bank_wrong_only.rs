// Word bank generated by compile_words. Edit the word list and recompile
// rather than changing this file. `sample_word` needs rand 0.8.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
  pub word: &'static str,
  pub correct: bool,
  pub right: Option<&'static str>,
}

pub static WORD_BANK: &[WordEntry] = &[
  WordEntry { word: "莫明其妙", correct: false, right: Some("莫名其妙") },
  WordEntry { word: "不加思索", correct: false, right: Some("不假思索") },
];

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
