//! Scoring weights for the field scorers.

use serde::{Deserialize, Serialize};

/// Points awarded per kind of match.
///
/// The defaults are the weights the blog has always ranked with. Every field
/// has its own serde default, so a partial TOML table only overrides what it
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Whole query found in the title.
    pub title_phrase: u32,
    /// A single query word found in the title.
    pub title_word: u32,
    /// Whole query found in the excerpt. Also the threshold under which an
    /// excerpt match claims the match label.
    pub excerpt_phrase: u32,
    /// A single query word found in the excerpt.
    pub excerpt_word: u32,
    /// A tag containing the whole query.
    pub tag: u32,
    /// A distinct query word found in the body.
    pub content_word: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_phrase: 100,
            title_word: 50,
            excerpt_phrase: 50,
            excerpt_word: 20,
            tag: 30,
            content_word: 5,
        }
    }
}

impl ScoringWeights {
    /// Set the title phrase weight.
    pub fn title_phrase(mut self, weight: u32) -> Self {
        self.title_phrase = weight;
        self
    }

    /// Set the title word weight.
    pub fn title_word(mut self, weight: u32) -> Self {
        self.title_word = weight;
        self
    }

    /// Set the excerpt phrase weight.
    pub fn excerpt_phrase(mut self, weight: u32) -> Self {
        self.excerpt_phrase = weight;
        self
    }

    /// Set the excerpt word weight.
    pub fn excerpt_word(mut self, weight: u32) -> Self {
        self.excerpt_word = weight;
        self
    }

    /// Set the per-tag weight.
    pub fn tag(mut self, weight: u32) -> Self {
        self.tag = weight;
        self
    }

    /// Set the content word weight.
    pub fn content_word(mut self, weight: u32) -> Self {
        self.content_word = weight;
        self
    }

    /// Overwrite a weight by its snake_case field name. Returns `false` for an
    /// unknown field.
    pub fn set(&mut self, field: &str, weight: u32) -> bool {
        let slot = match field {
            "title_phrase" => &mut self.title_phrase,
            "title_word" => &mut self.title_word,
            "excerpt_phrase" => &mut self.excerpt_phrase,
            "excerpt_word" => &mut self.excerpt_word,
            "tag" => &mut self.tag,
            "content_word" => &mut self.content_word,
            _ => return false,
        };
        *slot = weight;
        true
    }

    /// Field names accepted by [`set`](Self::set).
    pub const FIELDS: [&'static str; 6] = [
        "title_phrase",
        "title_word",
        "excerpt_phrase",
        "excerpt_word",
        "tag",
        "content_word",
    ];
}
