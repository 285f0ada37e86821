
use rand::{Rng, distributions::Uniform, prelude::Distribution};

use crate::entry::Entry;

pub const DEFAULT_PROB_WRONG: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<'a> {
  pub text: &'a str,
  pub correct: bool,
  pub right: Option<&'a str>,
}

/// Runtime twin of the generated `sample_word` helper.
pub struct Sampler<'a> {
  wrongs: Vec<&'a Entry>,
  rights: Vec<&'a Entry>,
}

impl<'a> Sampler<'a> {
  pub fn new(entries: &'a [Entry]) -> Sampler<'a> {
    let (rights, wrongs): (Vec<&Entry>, Vec<&Entry>) = entries.iter().partition(|e| e.correct);
    Sampler { wrongs, rights }
  }

  pub fn wrong_count(&self) -> usize {
    self.wrongs.len()
  }

  pub fn right_count(&self) -> usize {
    self.rights.len()
  }

  /// With `force_wrong` and at least one incorrect entry, returns a random
  /// incorrect entry. Otherwise a uniform draw below `prob_wrong` picks an
  /// incorrect entry and anything else picks a correct one. Returns `None` only
  /// when the chosen pool is empty.
  pub fn sample<R: Rng>(&self, rng: &mut R, prob_wrong: f64, force_wrong: bool) -> Option<Sample<'a>> {
    if force_wrong && !self.wrongs.is_empty() {
      return Some(pick_wrong(&self.wrongs, rng));
    }

    let use_wrong = rng.gen::<f64>() < prob_wrong && !self.wrongs.is_empty();
    if use_wrong {
      return Some(pick_wrong(&self.wrongs, rng));
    }

    if self.rights.is_empty() {
      return None;
    }
    let r = pick(&self.rights, rng);
    Some(Sample { text: &r.word, correct: true, right: None })
  }
}

fn pick<'a, R: Rng>(pool: &[&'a Entry], rng: &mut R) -> &'a Entry {
  pool[Uniform::new(0, pool.len()).sample(rng)]
}

fn pick_wrong<'a, R: Rng>(pool: &[&'a Entry], rng: &mut R) -> Sample<'a> {
  let w = pick(pool, rng);
  Sample { text: &w.word, correct: false, right: w.right.as_deref() }
}
