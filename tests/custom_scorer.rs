use blogsearch::prelude::*;
use chrono::NaiveDate;

/// Rewards short reads, regardless of the query.
struct QuickReadScorer {
  max_minutes: u32,
}

impl FieldScorer for QuickReadScorer {
  fn field(&self) -> &'static str {
    "read_time"
  }

  fn score(&self, post: &Post, _query: &QueryContext, card: &mut ScoreCard) {
    if post.read_time_minutes <= self.max_minutes {
      card.add(self.max_minutes - post.read_time_minutes + 1);
    }
  }
}

fn posts() -> Vec<Post> {
  let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
  vec![
    Post::new("long", "Deep dive").read_time_minutes(30).date(date),
    Post::new("medium", "Overview").read_time_minutes(8).date(date),
    Post::new("short", "Quick tip").read_time_minutes(2).date(date),
  ]
}

#[test]
fn test_custom_scorer_replaces_standard_chain() {
  let engine = BlogSearchEngine::builder()
    .with(Box::new(QuickReadScorer { max_minutes: 10 }))
    .build();

  let results = engine.search(&posts(), "anything");

  assert_eq!(results.len(), 2);
  assert_eq!(results[0].post.id, "short"); // Shorter read -> higher score
  assert_eq!(results[0].relevance_score, 9);
  assert_eq!(results[1].post.id, "medium");
  assert!(results.iter().all(|r| r.match_type == MatchType::Content));
}

#[test]
fn test_custom_scorer_after_standard_scorers() {
  let weights = ScoringWeights::default();
  let engine = BlogSearchEngine::builder()
    .with(Box::new(TitleScorer::new(&weights)))
    .with(Box::new(QuickReadScorer { max_minutes: 10 }))
    .build();

  let results = engine.search(&posts(), "overview");

  assert_eq!(results[0].post.id, "medium");
  assert_eq!(results[0].relevance_score, 103);
  assert_eq!(results[0].match_type, MatchType::Title);
}

#[test]
fn test_blank_query_skips_custom_scorers() {
  let engine = BlogSearchEngine::builder()
    .with(Box::new(QuickReadScorer { max_minutes: 10 }))
    .build();

  assert!(engine.search(&posts(), "   ").is_empty());
}
