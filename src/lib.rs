pub mod entry;
pub mod classify;
pub mod word_list;
pub mod render;
pub mod sampling;
pub mod compile;
pub mod error;
pub mod logging;
