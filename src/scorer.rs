//! The `FieldScorer` trait, which defines the interface for scoring plugins.

use crate::context::QueryContext;
use crate::types::{MatchType, Post};

/// The running tally for one post while the scorers run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
  /// Points accumulated so far.
  pub score: u32,
  /// The current match label. Starts at [`MatchType::Content`].
  pub match_type: MatchType,
}

impl ScoreCard {
  /// Adds points, saturating at `u32::MAX`.
  pub fn add(&mut self, points: u32) {
    self.score = self.score.saturating_add(points);
  }

  /// Returns `true` if any scorer awarded points.
  pub fn is_match(&self) -> bool {
    self.score > 0
  }
}

/// A trait for scorers that inspect one aspect of a post.
///
/// The engine runs its scorers in registration order over a shared
/// [`ScoreCard`]. Order matters: a scorer may look at the score and label
/// left by earlier scorers before deciding whether to relabel the match.
///
/// The `Send` and `Sync` bounds let an engine be shared between threads.
pub trait FieldScorer: Send + Sync {
  /// A short name for the field this scorer reads. Keys the breakdown from
  /// [`BlogSearchEngine::explain`](crate::engine::BlogSearchEngine::explain)
  /// and per-field trace logs.
  fn field(&self) -> &'static str;

  /// Adds this scorer's contribution for `post` to `card`.
  ///
  /// # Arguments
  ///
  /// * `post` - The post being scored. Scorers must not assume any other
  ///   post has been seen.
  /// * `query` - The normalized query for this call.
  /// * `card` - The tally built by the scorers that ran before this one.
  fn score(&self, post: &Post, query: &QueryContext, card: &mut ScoreCard);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_card_saturates() {
    let mut card = ScoreCard::default();
    card.add(u32::MAX);
    card.add(10);
    assert_eq!(card.score, u32::MAX);
    assert_eq!(card.match_type, MatchType::Content);
  }
}
