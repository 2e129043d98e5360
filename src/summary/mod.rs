// Extractive summarization — sentence splitting and frequency ranking.

pub mod frequency;
pub mod sentences;
pub mod traits;
