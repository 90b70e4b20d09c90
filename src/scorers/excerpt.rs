//! A `FieldScorer` for post excerpts.

use crate::context::QueryContext;
use crate::scorer::{FieldScorer, ScoreCard};
use crate::types::{MatchType, Post};
use crate::weights::ScoringWeights;

/// Scores the excerpt.
///
/// A whole-query match earns the phrase weight. It only claims the `excerpt`
/// label when the running score is still below that weight, which keeps a
/// title phrase match labelled `title`. Without a phrase match, each query
/// word found earns the word weight.
pub struct ExcerptScorer {
  phrase_weight: u32,
  word_weight: u32,
}

impl ExcerptScorer {
  pub fn new(weights: &ScoringWeights) -> Self {
    Self {
      phrase_weight: weights.excerpt_phrase,
      word_weight: weights.excerpt_word,
    }
  }
}

impl Default for ExcerptScorer {
  fn default() -> Self {
    Self::new(&ScoringWeights::default())
  }
}

impl FieldScorer for ExcerptScorer {
  fn field(&self) -> &'static str {
    "excerpt"
  }

  fn score(&self, post: &Post, query: &QueryContext, card: &mut ScoreCard) {
    let excerpt = post.excerpt.to_lowercase();

    if excerpt.contains(&query.phrase) {
      if card.score < self.phrase_weight {
        card.match_type = MatchType::Excerpt;
      }
      card.add(self.phrase_weight);
      return;
    }

    for word in &query.words {
      if excerpt.contains(word.as_str()) {
        card.add(self.word_weight);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run(card: &mut ScoreCard, excerpt: &str, query: &str) {
    let ctx = QueryContext::new(query).unwrap();
    let post = Post::new("p", "").excerpt(excerpt);
    ExcerptScorer::default().score(&post, &ctx, card);
  }

  #[test]
  fn test_phrase_match_labels_fresh_card() {
    let mut card = ScoreCard::default();
    run(&mut card, "Learn the basics of Rust", "basics of");
    assert_eq!(card.score, 50);
    assert_eq!(card.match_type, MatchType::Excerpt);
  }

  #[test]
  fn test_phrase_match_keeps_title_label() {
    let mut card = ScoreCard {
      score: 100,
      match_type: MatchType::Title,
    };
    run(&mut card, "Learn Rust", "rust");
    assert_eq!(card.score, 150);
    assert_eq!(card.match_type, MatchType::Title);
  }

  #[test]
  fn test_title_words_at_threshold_block_relabel() {
    // Title word matches leave the label at `content` but push the score to
    // the threshold, so the excerpt does not take the label either.
    let mut card = ScoreCard {
      score: 50,
      match_type: MatchType::Content,
    };
    run(&mut card, "all about rust", "rust");
    assert_eq!(card.score, 100);
    assert_eq!(card.match_type, MatchType::Content);
  }

  #[test]
  fn test_word_matches() {
    let mut card = ScoreCard::default();
    run(&mut card, "tips for react devs", "react hooks devs");
    assert_eq!(card.score, 40);
    assert_eq!(card.match_type, MatchType::Content);
  }
}
