//! blogsearch - relevance search for a personal blog.
//!
//! Ranks posts against a free-text query with weighted substring and word
//! matching over titles, excerpts, tags and bodies, derives autocomplete
//! suggestions, and finds highlight spans. Everything runs in memory over a
//! slice of posts supplied by the caller.
//!
//! ```rust
//! use blogsearch::prelude::*;
//!
//! let posts = vec![
//!     Post::new("1", "Next.js Guide")
//!         .excerpt("Learn Next.js basics")
//!         .tags(["Next.js", "Tutorial"])
//!         .content("Next.js is great"),
//!     Post::new("2", "React Tips")
//!         .excerpt("Tips for React devs")
//!         .tags(["React"])
//!         .content("use Next.js sparingly"),
//! ];
//!
//! let results = search(&posts, "Next.js", None);
//! assert_eq!(results[0].relevance_score, 185);
//! assert_eq!(results[1].relevance_score, 5);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod extension;
pub mod filter;
pub mod highlight;
pub mod scorer;
pub mod scorers;
pub mod store;
pub mod suggest;
pub mod types;
pub mod weights;

pub use highlight::highlight;
pub use suggest::suggest;

use crate::engine::BlogSearchEngine;
use crate::filter::SearchFilters;
use crate::types::{Post, SearchResult};

/// Searches `posts` with the standard ranking and default weights.
///
/// A blank query returns nothing. `filters`, when given, only remove
/// results; they never change a score.
pub fn search(posts: &[Post], query: &str, filters: Option<&SearchFilters>) -> Vec<SearchResult> {
  let engine = BlogSearchEngine::new();
  match filters {
    Some(filters) => engine.search_with_filters(posts, query, filters),
    None => engine.search(posts, query),
  }
}

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::config::*;
  pub use crate::context::*;
  pub use crate::engine::*;
  pub use crate::error::*;
  pub use crate::extension::*;
  pub use crate::filter::*;
  pub use crate::highlight::*;
  pub use crate::scorer::*;
  pub use crate::scorers::*;
  pub use crate::store::*;
  pub use crate::suggest::*;
  pub use crate::types::*;
  pub use crate::weights::*;
  pub use crate::search;
}
