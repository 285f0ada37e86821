
use std::path::PathBuf;
use anyhow::{bail, Context};
use clap::Parser;
use console::style;
use rand::{SeedableRng, rngs::SmallRng};
use word_bank::word_list::WordList;
use word_bank::sampling::{Sampler, DEFAULT_PROB_WRONG};

/// Draw quiz words from a word list the way the generated helper does.
#[derive(Parser, Debug)]
#[command()]
struct Args {
    #[arg()]
    input: PathBuf,

    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Chance of drawing an incorrect word, between 0 and 1
    #[arg(long, default_value_t = DEFAULT_PROB_WRONG)]
    prob_wrong: f64,

    #[arg(long)]
    force_wrong: bool,

    /// Makes the draws reproducible
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
  word_bank::logging::init();
  let args = Args::parse();

  if !(0.0 ..= 1.0).contains(&args.prob_wrong) {
    bail!("--prob-wrong must be between 0 and 1, got {}", args.prob_wrong);
  }

  let list = WordList::load(&args.input)
    .with_context(|| format!("loading {}", args.input.display()))?;
  let sampler = Sampler::new(list.entries());

  let mut rng = match args.seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_entropy(),
  };

  for _ in 0 .. args.count {
    let Some(sample) = sampler.sample(&mut rng, args.prob_wrong, args.force_wrong) else {
      bail!("{} has no words to draw from", args.input.display());
    };
    match sample.right {
      Some(right) => println!("{} {}", style(sample.text).red(), style(format!("→ {}", right)).dim()),
      None => println!("{}", sample.text),
    }
  }

  Ok(())
}
