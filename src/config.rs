use std::env;

use anyhow::{Context, Result};

use crate::pipeline::verdict::AnalyzerSettings;

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Default web server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// variable is optional; defaults reproduce the stock behavior.
#[derive(Debug, Clone)]
pub struct Config {
    /// Summary triggers only above this many words (SMOLDER_SUMMARY_MIN_WORDS)
    pub summary_min_words: usize,
    /// Sentences kept in a summary (SMOLDER_SUMMARY_SENTENCES)
    pub summary_sentences: usize,
    /// Web server bind address (SMOLDER_BIND)
    pub bind: String,
    /// Web server port (PORT)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        let settings = AnalyzerSettings::default();
        Self {
            summary_min_words: settings.summary_min_words,
            summary_sentences: settings.summary_sentences,
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset or blank values fall back to defaults; values that are set but
    /// unparseable are an error naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let summary_min_words: usize = match get("SMOLDER_SUMMARY_MIN_WORDS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("SMOLDER_SUMMARY_MIN_WORDS is not a number: {v}"))?,
            None => defaults.summary_min_words,
        };

        let summary_sentences: usize = match get("SMOLDER_SUMMARY_SENTENCES") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("SMOLDER_SUMMARY_SENTENCES is not a number: {v}"))?,
            None => defaults.summary_sentences,
        };
        if summary_sentences == 0 {
            anyhow::bail!("SMOLDER_SUMMARY_SENTENCES must be at least 1");
        }

        let port: u16 = match get("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {v}"))?,
            None => defaults.port,
        };

        Ok(Self {
            summary_min_words,
            summary_sentences,
            bind: get("SMOLDER_BIND").unwrap_or(defaults.bind),
            port,
        })
    }

    /// Settings for the analysis pipeline.
    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            summary_min_words: self.summary_min_words,
            summary_sentences: self.summary_sentences,
        }
    }
}
