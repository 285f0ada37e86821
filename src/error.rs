
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
  #[error("could not read word list {}", .path.display())]
  Read { path: PathBuf, #[source] source: io::Error },
  #[error("could not write {}", .path.display())]
  Write { path: PathBuf, #[source] source: io::Error },
  #[error("could not serialize word bank")]
  Render(#[from] serde_json::Error),
}
