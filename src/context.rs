//! The normalized query shared by every scorer during one search.

use crate::scorers::tokenizer::split_words;

/// A query prepared for case-insensitive matching.
///
/// `QueryContext` is built once per search call and handed to every
/// [`FieldScorer`](crate::scorer::FieldScorer), so scorers never repeat the
/// lowercasing and splitting work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
  /// The lowercased query. Surrounding whitespace is kept, so `"rust "`
  /// only matches text containing a space after "rust".
  pub phrase: String,
  /// Whitespace-separated words of `phrase`, in order. Repeated words are kept.
  pub words: Vec<String>,
}

impl QueryContext {
  /// Normalizes a raw query. Returns `None` when the query is empty or only
  /// whitespace.
  pub fn new(raw: &str) -> Option<Self> {
    if raw.trim().is_empty() {
      return None;
    }

    let phrase = raw.to_lowercase();
    let words = split_words(&phrase);
    Some(Self { phrase, words })
  }

  /// Query words with repeats removed, first occurrence wins.
  pub fn distinct_words(&self) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    self
      .words
      .iter()
      .map(String::as_str)
      .filter(|w| seen.insert(*w))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_blank_query_has_no_context() {
    assert!(QueryContext::new("").is_none());
    assert!(QueryContext::new("  \t\n ").is_none());
  }

  #[test]
  fn test_query_is_lowercased_but_not_trimmed() {
    let ctx = QueryContext::new("  Rust  ASYNC ").unwrap();
    assert_eq!(ctx.phrase, "  rust  async ");
    assert_eq!(ctx.words, vec!["rust", "async"]);
  }

  #[test]
  fn test_distinct_words_keep_first_order() {
    let ctx = QueryContext::new("b a b c a").unwrap();
    assert_eq!(ctx.distinct_words(), vec!["b", "a", "c"]);
  }
}
