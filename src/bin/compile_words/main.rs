
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use console::style;
use word_bank::compile::{compile, CompileConfig};
use word_bank::render::OutputFormat;

/// Turn a word list into a generated word bank with a sampling helper.
#[derive(Parser, Debug)]
#[command()]
struct Args {
    /// Word list, one entry per line
    #[arg()]
    input: PathBuf,

    /// Generated file, overwritten on every run
    #[arg()]
    output: PathBuf,

    /// Defaults to a guess from the output extension
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
  word_bank::logging::init();
  let args = Args::parse();

  let mut config = CompileConfig::new(args.input, args.output);
  if let Some(format) = args.format {
    config.format = format;
  }

  let summary = compile(&config)
    .with_context(|| format!("compiling {}", config.input.display()))?;

  println!("{}", style(summary).green());
  Ok(())
}
