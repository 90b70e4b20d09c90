//! Post-scoring filters.
//!
//! Filters decide membership in the final result list. They are evaluated
//! after relevance has been computed and never change a score. The same
//! filters drive [`crate::store::PostRepository::find`], so a blog listing
//! and a search share one notion of "which posts are in scope".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Post;

/// Inclusion rules applied to posts.
///
/// Every rule is optional; an unset rule admits every post. Bounds are
/// inclusive and are not validated, so `min > max` simply admits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
  /// A post survives if it carries at least one of these tags. An empty list
  /// behaves like no tag filter at all.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<String>>,
  /// Inclusive publication date window.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date_range: Option<DateRange>,
  /// Inclusive reading time window in minutes.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub read_time_range: Option<ReadTimeRange>,
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
  pub from: NaiveDate,
  pub to: NaiveDate,
}

impl DateRange {
  pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
    Self { from, to }
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    self.from <= date && date <= self.to
  }
}

/// An inclusive range of reading times in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTimeRange {
  pub min: u32,
  pub max: u32,
}

impl ReadTimeRange {
  pub fn new(min: u32, max: u32) -> Self {
    Self { min, max }
  }

  pub fn contains(&self, minutes: u32) -> bool {
    self.min <= minutes && minutes <= self.max
  }
}

impl SearchFilters {
  /// Creates an empty filter set that admits every post.
  pub fn new() -> Self {
    Self::default()
  }

  /// Requires at least one of the given tags.
  pub fn tags<I, S>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.tags = Some(tags.into_iter().map(Into::into).collect());
    self
  }

  /// Restricts the publication date to `from..=to`.
  pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
    self.date_range = Some(DateRange::new(from, to));
    self
  }

  /// Restricts the reading time to `min..=max` minutes.
  pub fn read_time_range(mut self, min: u32, max: u32) -> Self {
    self.read_time_range = Some(ReadTimeRange::new(min, max));
    self
  }

  /// Returns `true` when no rule is set.
  pub fn is_empty(&self) -> bool {
    self.tags.as_ref().map_or(true, |t| t.is_empty())
      && self.date_range.is_none()
      && self.read_time_range.is_none()
  }

  /// Evaluates every rule against a post.
  ///
  /// Tag comparison is exact: a filter for `"Rust"` does not admit a post
  /// tagged `"rust"`. Tags come from the same vocabulary on both sides.
  pub fn evaluate(&self, post: &Post) -> bool {
    if let Some(required) = &self.tags {
      if !required.is_empty() && !post.tags.iter().any(|t| required.contains(t)) {
        return false;
      }
    }

    if let Some(range) = &self.date_range {
      if !range.contains(post.date) {
        return false;
      }
    }

    if let Some(range) = &self.read_time_range {
      if !range.contains(post.read_time_minutes) {
        return false;
      }
    }

    true
  }
}
