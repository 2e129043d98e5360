// Analysis pipeline — turns raw text into a Verdict.

pub mod verdict;
