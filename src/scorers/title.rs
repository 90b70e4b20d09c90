//! A `FieldScorer` for post titles.

use crate::context::QueryContext;
use crate::scorer::{FieldScorer, ScoreCard};
use crate::types::{MatchType, Post};
use crate::weights::ScoringWeights;

/// Scores the title, the strongest signal a post has.
///
/// If the whole query appears in the title the post gets the phrase weight
/// and the `title` label. Otherwise every query word found in the title earns
/// the word weight, without touching the label.
pub struct TitleScorer {
  phrase_weight: u32,
  word_weight: u32,
}

impl TitleScorer {
  pub fn new(weights: &ScoringWeights) -> Self {
    Self {
      phrase_weight: weights.title_phrase,
      word_weight: weights.title_word,
    }
  }
}

impl Default for TitleScorer {
  fn default() -> Self {
    Self::new(&ScoringWeights::default())
  }
}

impl FieldScorer for TitleScorer {
  fn field(&self) -> &'static str {
    "title"
  }

  fn score(&self, post: &Post, query: &QueryContext, card: &mut ScoreCard) {
    let title = post.title.to_lowercase();

    if title.contains(&query.phrase) {
      card.add(self.phrase_weight);
      card.match_type = MatchType::Title;
      return;
    }

    for word in &query.words {
      if title.contains(word.as_str()) {
        card.add(self.word_weight);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run(title: &str, query: &str) -> ScoreCard {
    let mut card = ScoreCard::default();
    let ctx = QueryContext::new(query).unwrap();
    TitleScorer::default().score(&Post::new("p", title), &ctx, &mut card);
    card
  }

  #[test]
  fn test_phrase_match_sets_label() {
    let card = run("Getting Started with Rust", "started WITH");
    assert_eq!(card.score, 100);
    assert_eq!(card.match_type, MatchType::Title);
  }

  #[test]
  fn test_word_matches_do_not_relabel() {
    let card = run("Rust and Async", "async rust tokio");
    assert_eq!(card.score, 100);
    assert_eq!(card.match_type, MatchType::Content);
  }

  #[test]
  fn test_repeated_word_counts_each_time() {
    let card = run("Rust and Async", "rust tokio rust");
    assert_eq!(card.score, 100);
  }
}
