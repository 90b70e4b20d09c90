//! Core data types for blog search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::SearchFilters;

/// Type alias for post identifiers.
///
/// Posts are keyed by an opaque string (a slug or a database id). The alias
/// keeps signatures readable where an id is expected.
pub type PostId = String;

/// A blog post as supplied by the caller.
///
/// The search engine only ever reads a `Post`; results carry a clone of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  /// Unique identifier of the post.
  pub id: PostId,
  /// The post headline.
  pub title: String,
  /// A short summary shown in listings.
  pub excerpt: String,
  /// The full markdown body.
  pub content: String,
  /// Tags in the order the author entered them.
  #[serde(default)]
  pub tags: Vec<String>,
  /// Publication date (`YYYY-MM-DD`).
  pub date: NaiveDate,
  /// Estimated reading time in minutes.
  pub read_time_minutes: u32,
}

impl Post {
  /// Creates a post with the given id and title. Remaining text fields are
  /// empty, the date is the Unix epoch and the read time is one minute.
  pub fn new(id: impl Into<PostId>, title: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      excerpt: String::new(),
      content: String::new(),
      tags: Vec::new(),
      date: NaiveDate::default(),
      read_time_minutes: 1,
    }
  }

  /// Sets the excerpt.
  pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
    self.excerpt = excerpt.into();
    self
  }

  /// Sets the markdown body.
  pub fn content(mut self, content: impl Into<String>) -> Self {
    self.content = content.into();
    self
  }

  /// Replaces the tag list.
  pub fn tags<I, S>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.tags = tags.into_iter().map(Into::into).collect();
    self
  }

  /// Sets the publication date.
  pub fn date(mut self, date: NaiveDate) -> Self {
    self.date = date;
    self
  }

  /// Sets the reading time.
  pub fn read_time_minutes(mut self, minutes: u32) -> Self {
    self.read_time_minutes = minutes;
    self
  }
}

/// The category of the strongest match found in a post.
///
/// This is a display label only; it never takes part in ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
  /// The whole query appeared in the title.
  Title,
  /// The whole query appeared in the excerpt and the title did not win.
  Excerpt,
  /// At least one tag contained the whole query.
  Tag,
  /// Fallback label when nothing stronger matched.
  #[default]
  Content,
}

impl MatchType {
  /// Returns the lowercase label used in JSON and on UI badges.
  pub fn as_str(&self) -> &'static str {
    match self {
      MatchType::Title => "title",
      MatchType::Excerpt => "excerpt",
      MatchType::Tag => "tag",
      MatchType::Content => "content",
    }
  }
}

impl std::fmt::Display for MatchType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A post that matched a query, together with its relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
  /// The matched post, carried through unchanged.
  #[serde(flatten)]
  pub post: Post,
  /// The accumulated weight of every match; higher is more relevant.
  pub relevance_score: u32,
  /// Which field drove the top-weighted match.
  pub match_type: MatchType,
}

/// A search call bundled into one value.
///
/// `SearchRequest` is what the CLI and other callers build when they want
/// filters or a result limit; the plain [`crate::search`] function covers the
/// common case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
  /// Free text typed by the user.
  pub query: String,
  /// Post-scoring inclusion rules.
  #[serde(default)]
  pub filters: SearchFilters,
  /// Maximum number of results to return. `None` returns everything.
  #[serde(default)]
  pub limit: Option<usize>,
}

impl SearchRequest {
  /// Creates a `SearchRequestBuilder` for chained construction.
  pub fn builder() -> SearchRequestBuilder {
    SearchRequestBuilder::default()
  }
}

/// A builder for creating `SearchRequest` instances.
#[derive(Debug, Default)]
pub struct SearchRequestBuilder {
  query: String,
  filters: SearchFilters,
  limit: Option<usize>,
}

impl SearchRequestBuilder {
  /// Sets the query text.
  pub fn query(mut self, query: impl Into<String>) -> Self {
    self.query = query.into();
    self
  }

  /// Sets the filters applied after scoring.
  pub fn filters(mut self, filters: SearchFilters) -> Self {
    self.filters = filters;
    self
  }

  /// Caps the number of returned results.
  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Builds the final `SearchRequest`.
  pub fn build(self) -> SearchRequest {
    SearchRequest {
      query: self.query,
      filters: self.filters,
      limit: self.limit,
    }
  }
}
