#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Sentiment polarity models and severity scoring.
//!
//! Severity is derived from free-text sentiment: a summary with maximally
//! negative polarity maps to severity 1.0 (most severe), maximally positive
//! polarity maps to 0.0. The polarity capability is behind the
//! [`SentimentModel`] trait so the default lexicon can be swapped for any
//! model that returns polarity in `[-1.0, 1.0]`.

mod lexicon;

pub use lexicon::LexiconModel;

use thiserror::Error;

/// Errors that can occur while scoring a summary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentimentError {
    /// The input text was empty or whitespace-only.
    #[error("cannot score an empty summary")]
    EmptyText,
}

/// A sentiment capability: given text, return polarity in `[-1.0, 1.0]`.
pub trait SentimentModel: Send + Sync {
    /// Computes the sentiment polarity of `text`.
    ///
    /// −1.0 is maximally negative, +1.0 maximally positive.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::EmptyText`] if `text` contains no
    /// scoreable content.
    fn polarity(&self, text: &str) -> Result<f64, SentimentError>;
}

/// Maps a polarity value to a severity in `[0.0, 1.0]`.
///
/// Severity is `(1 - polarity) / 2`, rounded to 3 decimal places.
/// Out-of-range polarities are clamped first, so the result is always
/// within bounds.
#[must_use]
pub fn severity_from_polarity(polarity: f64) -> f64 {
    let severity = (1.0 - polarity.clamp(-1.0, 1.0)) / 2.0;
    round_to_3(severity)
}

/// Scores an incident summary: polarity via `model`, then
/// [`severity_from_polarity`].
///
/// # Errors
///
/// Propagates any error from the underlying sentiment model.
pub fn score<M: SentimentModel + ?Sized>(model: &M, text: &str) -> Result<f64, SentimentError> {
    Ok(severity_from_polarity(model.polarity(text)?))
}

fn round_to_3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
