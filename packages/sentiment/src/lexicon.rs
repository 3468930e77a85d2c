//! Word-valence lexicon sentiment model.
//!
//! A small lexicon tuned for police incident summaries. Polarity is the
//! mean valence of the summary tokens found in the lexicon — incident
//! reports are short and formulaic, so a handful of domain terms carries
//! almost all of the signal.

use crate::{SentimentError, SentimentModel};

/// Token valences in `[-1.0, 1.0]`. Matched against whole lowercased
/// tokens, not substrings, so "armed" never fires on "farmed".
const LEXICON: &[(&str, f64)] = &[
    // ── Violent crime ───────────────────────────────────────────────
    ("murder", -1.0),
    ("homicide", -1.0),
    ("killing", -1.0),
    ("terrible", -1.0),
    ("horrific", -1.0),
    ("kidnapping", -0.95),
    ("violent", -0.9),
    ("violence", -0.9),
    ("stabbing", -0.9),
    ("shooting", -0.9),
    ("assault", -0.85),
    ("attack", -0.8),
    ("attacked", -0.8),
    ("abuse", -0.8),
    // ── Weapons and injury ──────────────────────────────────────────
    ("armed", -0.7),
    ("weapon", -0.7),
    ("knife", -0.7),
    ("gun", -0.7),
    ("injured", -0.7),
    ("arson", -0.7),
    // ── Property crime ──────────────────────────────────────────────
    ("robbery", -0.6),
    ("robbed", -0.6),
    ("threatening", -0.6),
    ("harassment", -0.6),
    ("burglary", -0.55),
    ("theft", -0.5),
    ("stolen", -0.5),
    ("fight", -0.5),
    ("brawl", -0.5),
    ("fraud", -0.45),
    ("vandalism", -0.4),
    ("damaged", -0.4),
    ("trespassing", -0.35),
    ("dispute", -0.35),
    // ── Low-grade disturbances ──────────────────────────────────────
    ("suspicious", -0.3),
    ("loitering", -0.2),
    ("complaint", -0.2),
    ("noise", -0.1),
    // ── Mitigating language ─────────────────────────────────────────
    ("minor", 0.4),
    ("returned", 0.4),
    ("recovered", 0.5),
    ("assisted", 0.5),
    ("calm", 0.6),
    ("resolved", 0.6),
    ("peaceful", 0.7),
    ("safe", 0.8),
];

/// The default lexical sentiment model.
pub struct LexiconModel;

impl LexiconModel {
    /// Creates the lexicon model.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconModel {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        if text.trim().is_empty() {
            return Err(SentimentError::EmptyText);
        }

        let lowered = text.to_lowercase();
        let valences: Vec<f64> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter_map(valence)
            .collect();

        if valences.is_empty() {
            return Ok(0.0);
        }

        let mean = valences.iter().sum::<f64>() / valences.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}

/// Looks up the valence of a single lowercased token.
fn valence(token: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, v)| *v)
}
