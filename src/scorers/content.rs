//! A `FieldScorer` for the post body.

use crate::context::QueryContext;
use crate::scorer::{FieldScorer, ScoreCard};
use crate::scorers::tokenizer::count_contained;
use crate::types::Post;
use crate::weights::ScoringWeights;

/// Scores the markdown body by distinct query words.
///
/// The body is the weakest signal: each distinct query word found anywhere in
/// it earns the content weight once, however often it occurs. The match label
/// is never changed here.
pub struct ContentScorer {
  weight: u32,
}

impl ContentScorer {
  pub fn new(weights: &ScoringWeights) -> Self {
    Self {
      weight: weights.content_word,
    }
  }
}

impl Default for ContentScorer {
  fn default() -> Self {
    Self::new(&ScoringWeights::default())
  }
}

impl FieldScorer for ContentScorer {
  fn field(&self) -> &'static str {
    "content"
  }

  fn score(&self, post: &Post, query: &QueryContext, card: &mut ScoreCard) {
    let content = post.content.to_lowercase();
    let matched = count_contained(&content, query.distinct_words()) as u32;
    card.add(self.weight.saturating_mul(matched));
  }
}
