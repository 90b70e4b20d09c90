//! The search engine that runs the field scorers over a set of posts.

use crate::config::SearchConfig;
use crate::context::QueryContext;
use crate::extension::SearchExtension;
use crate::filter::SearchFilters;
use crate::scorer::{FieldScorer, ScoreCard};
use crate::scorers::standard_scorers;
use crate::suggest::suggest;
use crate::types::{Post, SearchRequest, SearchResult};
use crate::weights::ScoringWeights;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Ranks blog posts against a free-text query.
///
/// `BlogSearchEngine` owns an ordered chain of [`FieldScorer`]s and a list of
/// [`SearchExtension`]s. It keeps no state between calls, so one engine can
/// serve every request of a process.
///
/// Create one with [`BlogSearchEngine::new`] for the standard ranking, or with
/// [`BlogSearchEngine::builder`] to customize scorers and hooks.
///
/// # Examples
///
/// ```rust
/// use blogsearch::prelude::*;
///
/// let posts = vec![
///     Post::new("1", "Next.js Guide").excerpt("Learn Next.js basics"),
///     Post::new("2", "React Tips").content("use Next.js sparingly"),
/// ];
///
/// let engine = BlogSearchEngine::new();
/// let results = engine.search(&posts, "next.js");
///
/// assert_eq!(results[0].post.id, "1");
/// assert_eq!(results[0].match_type, MatchType::Title);
/// assert_eq!(results[1].relevance_score, 5);
/// ```
pub struct BlogSearchEngine {
  /// Scorers in the order they run.
  scorers: Vec<Box<dyn FieldScorer>>,
  /// Hooks into the search lifecycle.
  extensions: Vec<Box<dyn SearchExtension>>,
  /// How many suggestions [`suggest`](Self::suggest) returns.
  suggestion_limit: usize,
}

impl BlogSearchEngine {
  /// Creates an engine with the standard scorers and default weights.
  pub fn new() -> Self {
    Self::builder().build()
  }

  /// Creates a new `BlogSearchEngineBuilder` to construct an engine.
  pub fn builder() -> BlogSearchEngineBuilder {
    BlogSearchEngineBuilder::new()
  }

  /// Creates an engine with the weights and limits from `config`.
  pub fn from_config(config: &SearchConfig) -> Self {
    Self::builder()
      .weights(config.weights)
      .suggestion_limit(config.suggestion_limit)
      .build()
  }

  /// The number of suggestions [`suggest`](Self::suggest) returns.
  pub fn suggestion_limit(&self) -> usize {
    self.suggestion_limit
  }

  /// Scores a single post. A score of zero means the post does not match.
  pub fn score_post(&self, post: &Post, query: &QueryContext) -> ScoreCard {
    self.explain(post, query).0
  }

  /// Scores a single post and reports what each scorer contributed, keyed by
  /// [`FieldScorer::field`], in chain order.
  pub fn explain(
    &self,
    post: &Post,
    query: &QueryContext,
  ) -> (ScoreCard, Vec<(&'static str, u32)>) {
    let mut card = ScoreCard::default();
    let mut field_scores = Vec::with_capacity(self.scorers.len());
    for scorer in &self.scorers {
      let before = card.score;
      scorer.score(post, query, &mut card);
      let delta = card.score.saturating_sub(before);
      tracing::trace!(post = %post.id, field = scorer.field(), delta, "field scored");
      field_scores.push((scorer.field(), delta));
    }
    tracing::trace!(
      post = %post.id,
      score = card.score,
      match_type = %card.match_type,
      "scored post"
    );
    (card, field_scores)
  }

  /// Searches `posts` for `query` without filters.
  ///
  /// Returns every post with a positive score, highest first. Posts with
  /// equal scores keep their input order. A blank query returns nothing.
  pub fn search(&self, posts: &[Post], query: &str) -> Vec<SearchResult> {
    self.run(posts, query, None, None)
  }

  /// Searches `posts` for `query`, then drops results rejected by `filters`.
  ///
  /// Filtering happens after scoring, so surviving scores are identical to
  /// those of an unfiltered search.
  pub fn search_with_filters(
    &self,
    posts: &[Post],
    query: &str,
    filters: &SearchFilters,
  ) -> Vec<SearchResult> {
    self.run(posts, query, Some(filters), None)
  }

  /// Runs a full [`SearchRequest`], including its result limit.
  pub fn execute(&self, posts: &[Post], request: &SearchRequest) -> Vec<SearchResult> {
    self.run(posts, &request.query, Some(&request.filters), request.limit)
  }

  /// Autocomplete suggestions for `query`, capped at the engine's limit.
  pub fn suggest(&self, posts: &[Post], query: &str) -> Vec<String> {
    suggest(posts, query, self.suggestion_limit)
  }

  /// The search lifecycle.
  ///
  /// 1. `before_query` hooks may rewrite the raw query.
  /// 2. A blank query ends the call with no results.
  /// 3. Every post is scored; posts scoring zero are dropped.
  /// 4. Results are sorted by score, descending and stable.
  /// 5. `after_score` hooks run.
  /// 6. Filters are applied.
  /// 7. `after_filter` hooks run.
  /// 8. The limit, if any, truncates the list.
  fn run(
    &self,
    posts: &[Post],
    query: &str,
    filters: Option<&SearchFilters>,
    limit: Option<usize>,
  ) -> Vec<SearchResult> {
    let mut query = query.to_string();
    for ext in &self.extensions {
      ext.before_query(&mut query);
    }

    let ctx = match QueryContext::new(&query) {
      Some(ctx) => ctx,
      None => {
        tracing::debug!("blank query, returning no results");
        return Vec::new();
      }
    };

    let mut results = self.score_all(posts, &ctx);
    sort_results(&mut results);
    let matched = results.len();

    for ext in &self.extensions {
      ext.after_score(&query, &mut results);
    }

    if let Some(filters) = filters.filter(|f| !f.is_empty()) {
      results.retain(|r| filters.evaluate(&r.post));
    }

    for ext in &self.extensions {
      ext.after_filter(&query, &mut results);
    }

    if let Some(limit) = limit {
      results.truncate(limit);
    }

    tracing::debug!(
      query = %ctx.phrase,
      posts = posts.len(),
      matched,
      returned = results.len(),
      "search complete"
    );

    results
  }

  fn score_result(&self, post: &Post, ctx: &QueryContext) -> Option<SearchResult> {
    let card = self.score_post(post, ctx);
    card.is_match().then(|| SearchResult {
      post: post.clone(),
      relevance_score: card.score,
      match_type: card.match_type,
    })
  }

  #[cfg(feature = "parallel")]
  fn score_all(&self, posts: &[Post], ctx: &QueryContext) -> Vec<SearchResult> {
    // Indexed parallel iterators collect in input order.
    posts
      .par_iter()
      .filter_map(|post| self.score_result(post, ctx))
      .collect()
  }

  #[cfg(not(feature = "parallel"))]
  fn score_all(&self, posts: &[Post], ctx: &QueryContext) -> Vec<SearchResult> {
    posts
      .iter()
      .filter_map(|post| self.score_result(post, ctx))
      .collect()
  }
}

impl Default for BlogSearchEngine {
  fn default() -> Self {
    Self::new()
  }
}

/// Sort by score descending. Both sorts are stable, so ties keep input order.
#[cfg(feature = "parallel")]
fn sort_results(results: &mut [SearchResult]) {
  results.par_sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
}

#[cfg(not(feature = "parallel"))]
fn sort_results(results: &mut [SearchResult]) {
  results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
}

/// A builder for creating `BlogSearchEngine` instances.
///
/// If no scorer is added with [`with`](Self::with), the engine gets the
/// standard chain built from the configured weights.
///
/// # Examples
///
/// ```
/// use blogsearch::prelude::*;
///
/// let engine = BlogSearchEngine::builder()
///     .weights(ScoringWeights::default().content_word(1))
///     .suggestion_limit(3)
///     .build();
///
/// let posts = vec![Post::new("a", "Notes").content("ownership and borrowing")];
/// assert_eq!(engine.search(&posts, "borrowing")[0].relevance_score, 1);
/// assert_eq!(engine.suggestion_limit(), 3);
/// ```
pub struct BlogSearchEngineBuilder {
  scorers: Vec<Box<dyn FieldScorer>>,
  extensions: Vec<Box<dyn SearchExtension>>,
  weights: ScoringWeights,
  suggestion_limit: usize,
}

impl BlogSearchEngineBuilder {
  /// Creates a new builder with default weights and no custom scorers.
  pub fn new() -> Self {
    Self {
      scorers: Vec::new(),
      extensions: Vec::new(),
      weights: ScoringWeights::default(),
      suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
    }
  }

  /// Adds a scorer to the end of the chain.
  ///
  /// Adding any scorer replaces the standard chain entirely.
  pub fn with(mut self, scorer: Box<dyn FieldScorer>) -> Self {
    self.scorers.push(scorer);
    self
  }

  /// Sets the weights used for the standard chain.
  pub fn weights(mut self, weights: ScoringWeights) -> Self {
    self.weights = weights;
    self
  }

  /// Adds an extension. Hooks run in registration order.
  pub fn with_extension(mut self, extension: Box<dyn SearchExtension>) -> Self {
    self.extensions.push(extension);
    self
  }

  /// Sets how many suggestions the engine returns.
  pub fn suggestion_limit(mut self, limit: usize) -> Self {
    self.suggestion_limit = limit;
    self
  }

  /// Builds the `BlogSearchEngine`.
  pub fn build(self) -> BlogSearchEngine {
    let scorers = if self.scorers.is_empty() {
      standard_scorers(&self.weights)
    } else {
      self.scorers
    };

    BlogSearchEngine {
      scorers,
      extensions: self.extensions,
      suggestion_limit: self.suggestion_limit,
    }
  }
}

impl Default for BlogSearchEngineBuilder {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::MatchType;

  fn posts() -> Vec<Post> {
    vec![
      Post::new("a", "Alpha").content("shared word"),
      Post::new("b", "Beta").content("shared word"),
      Post::new("c", "Shared Title"),
    ]
  }

  #[test]
  fn test_ties_keep_input_order() {
    let results = BlogSearchEngine::new().search(&posts(), "word");
    let ids: Vec<_> = results.iter().map(|r| r.post.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
  }

  #[test]
  fn test_title_match_ranks_first() {
    let results = BlogSearchEngine::new().search(&posts(), "shared");
    assert_eq!(results[0].post.id, "c");
    assert_eq!(results[0].match_type, MatchType::Title);
    assert_eq!(results[0].relevance_score, 100);
    assert_eq!(results[1].relevance_score, 5);
  }

  #[test]
  fn test_limit_truncates_after_filtering() {
    let request = SearchRequest::builder().query("shared").limit(2).build();
    let results = BlogSearchEngine::new().execute(&posts(), &request);
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].post.id, "a");
  }

  #[test]
  fn test_explain_reports_each_field() {
    let engine = BlogSearchEngine::new();
    let post = Post::new("p", "Shared Title").tags(["shared"]).content("shared");
    let ctx = QueryContext::new("shared").unwrap();

    let (card, field_scores) = engine.explain(&post, &ctx);

    assert_eq!(card.score, 135);
    assert_eq!(
      field_scores,
      vec![("title", 100), ("excerpt", 0), ("tags", 30), ("content", 5)]
    );
  }

  #[cfg(feature = "parallel")]
  #[test]
  fn test_parallel_matches_sequential_order() {
    // Three score tiers over many posts, so most results tie.
    let posts: Vec<Post> = (0..2_000)
      .map(|i| {
        let post = Post::new(format!("p{i}"), "Notes").content("rust");
        match i % 3 {
          0 => post.tags(["rust"]),
          1 => post.excerpt("rust"),
          _ => post,
        }
      })
      .collect();

    let engine = BlogSearchEngine::new();
    let ctx = QueryContext::new("rust").unwrap();
    let mut expected: Vec<(String, u32)> = posts
      .iter()
      .map(|p| (p.id.clone(), engine.score_post(p, &ctx).score))
      .filter(|(_, score)| *score > 0)
      .collect();
    expected.sort_by(|a, b| b.1.cmp(&a.1));

    let got: Vec<(String, u32)> = engine
      .search(&posts, "rust")
      .into_iter()
      .map(|r| (r.post.id, r.relevance_score))
      .collect();

    assert_eq!(got, expected);
  }

  #[test]
  fn test_score_post_without_match() {
    let engine = BlogSearchEngine::new();
    let ctx = QueryContext::new("zzz").unwrap();
    let card = engine.score_post(&posts()[0], &ctx);
    assert!(!card.is_match());
  }
}
