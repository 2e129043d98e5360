// Smolder: toxic comment detection, censoring and summarization.
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline, plus the configuration and output layers around it.

pub mod censor;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod summary;
pub mod toxicity;

#[cfg(feature = "web")]
pub mod web;
