//! Core types for extracted term cards and per-question resolutions.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// A single prompt/answer pair extracted from one term block on a
/// fetched content page.
///
/// Term cards are ephemeral — they exist only between extraction of a
/// page and aggregation into the tally for the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCard {
    /// The prompt side of the term block (the question text on the page).
    pub prompt: String,
    /// The answer/definition side of the term block.
    pub answer: String,
}

impl TermCard {
    /// Construct a term card, trimming surrounding whitespace from both sides.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        let prompt = prompt.into();
        let answer = answer.into();
        Self {
            prompt: prompt.trim().to_owned(),
            answer: answer.trim().to_owned(),
        }
    }
}

/// The outcome of resolving one question.
///
/// An empty `answer` with no `warning` is a valid result — it means no
/// candidate page contained a prompt matching the question, which is not
/// a failure. A `warning` carries the most recent candidate fetch error;
/// the answer aggregated from the sources that did succeed is still
/// reported next to it.
#[derive(Debug)]
pub struct Resolution {
    /// The majority answer text, or the empty string if nothing matched.
    pub answer: String,
    /// The last candidate fetch failure seen during resolution, if any.
    pub warning: Option<ResolveError>,
}

impl Resolution {
    /// A resolution with no answer and no warning.
    pub fn empty() -> Self {
        Self {
            answer: String::new(),
            warning: None,
        }
    }

    /// Whether any answer was found.
    pub fn found(&self) -> bool {
        !self.answer.is_empty()
    }
}
