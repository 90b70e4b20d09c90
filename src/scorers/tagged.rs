//! A `FieldScorer` for matching tags.

use crate::context::QueryContext;
use crate::scorer::{FieldScorer, ScoreCard};
use crate::types::{MatchType, Post};
use crate::weights::ScoringWeights;

/// A scorer that rewards tags containing the query.
///
/// Each tag whose lowercase form contains the whole query earns the tag
/// weight, so a post tagged both `"Rust"` and `"Rust Async"` scores twice for
/// `"rust"`. Individual query words are not matched against tags.
pub struct TaggedScorer {
  weight: u32,
}

impl TaggedScorer {
  pub fn new(weights: &ScoringWeights) -> Self {
    Self { weight: weights.tag }
  }

  /// Returns the tags of `post` that contain `phrase`, in post order.
  pub fn matched_tags<'a>(post: &'a Post, phrase: &str) -> Vec<&'a str> {
    post
      .tags
      .iter()
      .filter(|tag| tag.to_lowercase().contains(phrase))
      .map(String::as_str)
      .collect()
  }
}

impl Default for TaggedScorer {
  fn default() -> Self {
    Self::new(&ScoringWeights::default())
  }
}

impl FieldScorer for TaggedScorer {
  fn field(&self) -> &'static str {
    "tags"
  }

  fn score(&self, post: &Post, query: &QueryContext, card: &mut ScoreCard) {
    let matched = Self::matched_tags(post, &query.phrase).len() as u32;
    if matched == 0 {
      return;
    }

    card.add(self.weight.saturating_mul(matched));
    if card.match_type == MatchType::Content {
      card.match_type = MatchType::Tag;
    }
  }
}
