//! Case-insensitive match spans for highlighting query text.
//!
//! Rendering belongs to the caller. This module only finds where the query
//! occurs; [`Highlight::wrap`] is a convenience for plain marker insertion.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Text together with the byte spans where the query occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
  /// The original, unmodified text.
  pub text: String,
  /// Non-overlapping `[start, end)` byte ranges into `text`, ascending.
  /// Every range falls on `char` boundaries.
  pub spans: Vec<Range<usize>>,
}

impl Highlight {
  /// Returns `true` if the query occurred at least once.
  pub fn has_matches(&self) -> bool {
    !self.spans.is_empty()
  }

  /// The matched substrings, in their original casing.
  pub fn fragments(&self) -> impl Iterator<Item = &str> {
    self.spans.iter().map(move |span| &self.text[span.clone()])
  }

  /// Renders the text with `open` and `close` around every span.
  pub fn wrap(&self, open: &str, close: &str) -> String {
    let extra = self.spans.len() * (open.len() + close.len());
    let mut out = String::with_capacity(self.text.len() + extra);
    let mut cursor = 0;
    for span in &self.spans {
      out.push_str(&self.text[cursor..span.start]);
      out.push_str(open);
      out.push_str(&self.text[span.clone()]);
      out.push_str(close);
      cursor = span.end;
    }
    out.push_str(&self.text[cursor..]);
    out
  }

  /// Renders the text with `<mark>` tags around every span.
  ///
  /// The text itself is not HTML-escaped.
  pub fn to_html(&self) -> String {
    self.wrap("<mark>", "</mark>")
  }
}

/// Finds every case-insensitive occurrence of `query` in `text`.
///
/// The query is matched literally (no word splitting, no trimming), scanning
/// left to right and resuming after each match. An empty query matches
/// nothing and leaves the text untouched.
///
/// # Examples
///
/// ```rust
/// use blogsearch::prelude::*;
///
/// let h = highlight("Rust is rusty", "RUST");
/// assert_eq!(h.spans, vec![0..4, 8..12]);
/// assert_eq!(h.to_html(), "<mark>Rust</mark> is <mark>rust</mark>y");
/// ```
pub fn highlight(text: &str, query: &str) -> Highlight {
  Highlight {
    text: text.to_string(),
    spans: find_spans(text, query),
  }
}

/// The span search behind [`highlight`].
pub fn find_spans(text: &str, query: &str) -> Vec<Range<usize>> {
  if query.is_empty() {
    return Vec::new();
  }
  let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

  let mut spans = Vec::new();
  let mut pos = 0;
  while pos < text.len() {
    let rest = &text[pos..];
    match match_len(rest, &needle) {
      Some(len) => {
        spans.push(pos..pos + len);
        pos += len;
      }
      None => {
        pos += rest.chars().next().map_or(1, char::len_utf8);
      }
    }
  }
  spans
}

/// Byte length of the prefix of `hay` that lowercases to `needle`, if any.
fn match_len(hay: &str, needle: &[char]) -> Option<usize> {
  let mut remaining = needle;
  for (idx, c) in hay.char_indices() {
    if remaining.is_empty() {
      return Some(idx);
    }
    for lower in c.to_lowercase() {
      match remaining.split_first() {
        Some((expected, rest)) if *expected == lower => remaining = rest,
        // Also covers a multi-char lowercase running past the needle.
        _ => return None,
      }
    }
  }
  remaining.is_empty().then_some(hay.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_absent_query_leaves_text_alone() {
    let h = highlight("Nothing to see here", "zzz");
    assert!(!h.has_matches());
    assert_eq!(h.to_html(), "Nothing to see here");
  }

  #[test]
  fn test_empty_query_is_noop() {
    let h = highlight("abc", "");
    assert!(h.spans.is_empty());
    assert_eq!(h.text, "abc");
  }

  #[test]
  fn test_matches_do_not_overlap() {
    assert_eq!(find_spans("aaaa", "aa"), vec![0..2, 2..4]);
    assert_eq!(find_spans("aaa", "aa"), vec![0..2]);
  }

  #[test]
  fn test_multibyte_text() {
    let h = highlight("Crème brûlée et CRÈME", "crème");
    let fragments: Vec<_> = h.fragments().collect();
    assert_eq!(fragments, vec!["Crème", "CRÈME"]);
    assert_eq!(h.wrap("[", "]"), "[Crème] brûlée et [CRÈME]");
  }

  #[test]
  fn test_match_at_end_of_text() {
    assert_eq!(find_spans("learn next.js", "Next.JS"), vec![6..13]);
  }
}
