// Toxicity scoring — lexicon, matcher, and the scorer built on top of them.
//
// The ToxicityScorer trait defines the interface. LexiconScorer implements
// it with the static category/rule/weight table in `lexicon`.

pub mod lexicon;
pub mod lexicon_scorer;
pub mod matcher;
pub mod traits;
