use blogsearch::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct QueryRewriteExt;

impl SearchExtension for QueryRewriteExt {
  fn before_query(&self, query: &mut String) {
    if query.as_str() == "ml" {
      *query = "machine learning".to_string();
    }
  }
}

struct HideDraftsExt;

impl SearchExtension for HideDraftsExt {
  fn after_score(&self, _query: &str, results: &mut Vec<SearchResult>) {
    results.retain(|r| !r.post.tags.iter().any(|t| t == "draft"));
  }
}

struct CountingExt {
  seen: Arc<AtomicUsize>,
}

impl SearchExtension for CountingExt {
  fn after_filter(&self, _query: &str, results: &mut Vec<SearchResult>) {
    self.seen.store(results.len(), Ordering::SeqCst);
  }
}

fn posts() -> Vec<Post> {
  vec![
    Post::new("1", "Machine learning from scratch"),
    Post::new("2", "Learning Rust").tags(["draft"]),
    Post::new("3", "Notes").content("a little machine learning"),
  ]
}

#[test]
fn test_query_rewrite() {
  let engine = BlogSearchEngine::builder()
    .with_extension(Box::new(QueryRewriteExt))
    .build();

  let results = engine.search(&posts(), "ml");

  // "ml" is rewritten to "machine learning" before scoring.
  assert_eq!(results[0].post.id, "1");
  assert_eq!(results[0].match_type, MatchType::Title);
}

#[test]
fn test_after_score_can_drop_results() {
  let engine = BlogSearchEngine::builder()
    .with_extension(Box::new(HideDraftsExt))
    .build();

  let results = engine.search(&posts(), "learning");
  let ids: Vec<_> = results.iter().map(|r| r.post.id.as_str()).collect();

  assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_after_filter_sees_pre_limit_results() {
  let seen = Arc::new(AtomicUsize::new(0));
  let engine = BlogSearchEngine::builder()
    .with_extension(Box::new(CountingExt { seen: Arc::clone(&seen) }))
    .build();

  let request = SearchRequest::builder().query("learning").limit(1).build();
  let results = engine.execute(&posts(), &request);

  assert_eq!(results.len(), 1);
  assert_eq!(seen.load(Ordering::SeqCst), 3);
}
