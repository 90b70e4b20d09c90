//! Defines the extension system for the search engine.

use crate::types::SearchResult;

/// A trait for extensions that can hook into the search lifecycle.
///
/// Extensions can rewrite the query, re-weight or annotate results, or drop
/// results the caller may not see. Every hook has an empty default, so an
/// extension implements only what it needs.
///
/// # Examples
///
/// A query rewriting extension:
///
/// ```rust
/// use blogsearch::prelude::*;
///
/// struct Synonyms;
///
/// impl SearchExtension for Synonyms {
///     fn before_query(&self, query: &mut String) {
///         if query.trim().eq_ignore_ascii_case("js") {
///             *query = "javascript".to_string();
///         }
///     }
/// }
///
/// let engine = BlogSearchEngine::builder()
///     .with_extension(Box::new(Synonyms))
///     .build();
/// let posts = vec![Post::new("a", "JavaScript closures")];
/// assert_eq!(engine.search(&posts, "js").len(), 1);
/// ```
pub trait SearchExtension: Send + Sync {
  /// Called with the raw query before it is normalized.
  ///
  /// Runs before the empty-query check, so an extension may turn a blank
  /// query into a real one or the other way round.
  fn before_query(&self, _query: &mut String) {}

  /// Called after scoring and sorting, before filters are applied.
  ///
  /// `query` is the raw query after `before_query` hooks. Extensions that
  /// change scores here are responsible for re-sorting.
  fn after_score(&self, _query: &str, _results: &mut Vec<SearchResult>) {}

  /// Called after filters are applied, before any result limit.
  fn after_filter(&self, _query: &str, _results: &mut Vec<SearchResult>) {}
}
