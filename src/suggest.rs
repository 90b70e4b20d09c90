//! Autocomplete suggestions drawn from tags and title words.

use std::collections::HashSet;

use crate::types::Post;

/// Queries shorter than this (in characters, after trimming) get no
/// suggestions.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

/// Suggests completions for a partially typed query.
///
/// Candidates are collected in two passes over `posts`, keeping their
/// original casing:
///
/// 1. every tag whose lowercase form *contains* the query,
/// 2. every whitespace-delimited title word whose lowercase form *starts
///    with* the query.
///
/// Each distinct string is kept once, at the position it was first seen, and
/// the first `limit` candidates are returned. There is no ranking among
/// suggestions.
///
/// # Examples
///
/// ```rust
/// use blogsearch::prelude::*;
///
/// let posts = vec![
///     Post::new("1", "Rethinking React state").tags(["React", "Frontend"]),
///     Post::new("2", "Rust for web developers").tags(["Rust"]),
/// ];
///
/// assert_eq!(suggest(&posts, "re", 5), vec!["React", "Rethinking"]);
/// assert!(suggest(&posts, "r", 5).is_empty());
/// ```
pub fn suggest(posts: &[Post], query: &str, limit: usize) -> Vec<String> {
  if query.trim().chars().count() < MIN_SUGGESTION_QUERY_CHARS || limit == 0 {
    return Vec::new();
  }
  let needle = query.to_lowercase();

  let tags = posts
    .iter()
    .flat_map(|post| post.tags.iter())
    .filter(|tag| tag.to_lowercase().contains(&needle));

  let title_words = posts
    .iter()
    .flat_map(|post| post.title.split_whitespace())
    .filter(|word| word.to_lowercase().starts_with(&needle));

  let mut seen: HashSet<&str> = HashSet::new();
  tags
    .map(String::as_str)
    .chain(title_words)
    .filter(|candidate| seen.insert(*candidate))
    .take(limit)
    .map(str::to_string)
    .collect()
}
